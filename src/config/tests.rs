//! Configuration tests
//!
//! Precedence is exercised through `Config::resolve` with a fake environment,
//! so nothing here touches the real process env or home directory.

use super::*;
use std::collections::HashMap;
use std::io::Write;

fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

fn no_env() -> impl Fn(&str) -> Option<String> {
    env_of(&[])
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::resolve(FileConfig::default(), no_env()).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.api_url, "http://127.0.0.1:3000");
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.theme_kind(), ThemeKind::Dark);
    assert!(!config.demo_mode);
    assert_eq!(config.logging.file_prefix, "heroes");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_file_overrides_defaults() {
    let file = parse(
        r#"
api_url = "http://heroes.local:8000"
theme = "light"

[logging]
level = "debug"
file_rotation = "hourly"
"#,
    );

    let config = Config::resolve(file, no_env()).unwrap();

    assert_eq!(config.api_url, "http://heroes.local:8000");
    assert_eq!(config.theme_kind(), ThemeKind::Light);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    // Untouched keys keep defaults
    assert_eq!(config.request_timeout_secs, 10);
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
api_url = "http://from-file:8000"
bind_addr = "0.0.0.0:9000"
request_timeout_secs = 30
"#,
    );
    let env = env_of(&[
        ("HEROES_API_URL", "http://from-env:7000"),
        ("HEROES_TIMEOUT", "5"),
        ("HEROES_DEMO", "true"),
    ]);

    let config = Config::resolve(file, env).unwrap();

    assert_eq!(config.api_url, "http://from-env:7000");
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:9000");
    assert!(config.demo_mode);
}

#[test]
fn test_unparsable_timeout_env_is_ignored() {
    let file = parse("request_timeout_secs = 30");
    let config = Config::resolve(file, env_of(&[("HEROES_TIMEOUT", "soon")])).unwrap();
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_invalid_bind_address_is_an_error() {
    let err = Config::resolve(FileConfig::default(), env_of(&[("HEROES_BIND", "nowhere")]))
        .unwrap_err();
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn test_unknown_theme_falls_back_to_dark() {
    let config = Config::resolve(FileConfig::default(), env_of(&[("HEROES_THEME", "sepia")]))
        .unwrap();
    assert_eq!(config.theme_kind(), ThemeKind::Dark);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str("NEVER"), LogRotation::Never);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = load_file_config(&dir.path().join("config.toml")).unwrap();
    assert!(file.api_url.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn test_broken_file_is_an_error_naming_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_url = \"unterminated").unwrap();

    let err = load_file_config(file.path()).unwrap_err();

    assert!(err.to_string().contains(&file.path().display().to_string()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back into the same values.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let config = Config::resolve(parsed.unwrap(), no_env()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.api_url = "http://10.0.0.5:3000".to_string();
    config.theme = "nord".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Never;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let restored = Config::resolve(parsed, no_env()).unwrap();

    assert_eq!(restored, config);
}
