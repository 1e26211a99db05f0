// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI runs. Subcommands:
// - serve: run the in-memory hero API headless
// - config --show: Display effective configuration
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;

/// Tour of Heroes - terminal client for a hero REST API
#[derive(Parser)]
#[command(name = "heroes")]
#[command(version = VERSION)]
#[command(about = "Terminal client for the Tour of Heroes API", long_about = None)]
pub struct Cli {
    /// Run against an embedded in-memory API (same as HEROES_DEMO=1)
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the in-memory hero API without the TUI
    Serve {
        /// Address to bind (overrides HEROES_BIND and the config file)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Inspect configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle `heroes config`
pub fn handle_config(show: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show()?;
    } else {
        // No flag provided, show help
        println!("Usage: heroes config [--show|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
    }
    Ok(())
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    if config.demo_mode {
        println!();
        println!("# demo mode on (HEROES_DEMO)");
    }

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_serve_bind() {
        let cli = Cli::try_parse_from(["heroes", "serve", "--bind", "0.0.0.0:4000"]).unwrap();
        match cli.command {
            Some(Commands::Serve { bind }) => {
                assert_eq!(bind, Some("0.0.0.0:4000".parse().unwrap()));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_demo_flag_without_subcommand() {
        let cli = Cli::try_parse_from(["heroes", "--demo"]).unwrap();
        assert!(cli.demo);
        assert!(cli.command.is_none());
    }
}
