//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# heroes configuration

# Hero REST API base url (HEROES_API_URL)
api_url = "{api_url}"

# Bind address for `heroes serve` (HEROES_BIND)
bind_addr = "{bind}"

# Per-request timeout in seconds (HEROES_TIMEOUT)
request_timeout_secs = {timeout}

# Theme: dark, light, nord (HEROES_THEME)
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = "{log_level}"
# JSON file logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api_url = self.api_url,
            bind = self.bind_addr,
            timeout = self.request_timeout_secs,
            theme = self.theme,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
