// Tour of Heroes - terminal client for a hero REST API
//
// Lists, adds, edits and deletes heroes held by a backend reached over
// HTTP, with a running feed of what the client did.
//
// Architecture:
// - Service (reqwest): CRUD calls against `{api_url}/api/heroes`
// - Router: url history that decides which view is active
// - TUI (ratatui): routed views plus messages and system logs panels
// - Server (axum): in-memory API for `heroes serve` and `--demo`

mod cli;
mod config;
mod hero;
mod logging;
mod messages;
mod router;
mod server;
mod service;
mod tui;

#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogOutput};
use messages::{MessageLog, MessageService};
use router::{Router, DEFAULT_URL};
use server::HeroStore;
use service::HttpHeroService;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, path }) => cli::handle_config(show, path),
        Some(Commands::Serve { bind }) => run_server(bind).await,
        None => run_client(cli.demo).await,
    }
}

/// `heroes serve`: the in-memory API, logging to stdout
async fn run_server(bind: Option<SocketAddr>) -> Result<()> {
    let config = Config::from_env()?;

    // The guard must be kept alive so file logs flush
    let _file_guard = logging::init_tracing(&config.logging, LogOutput::Stdout);

    let store = Arc::new(Mutex::new(HeroStore::seeded()));
    server::serve(bind.unwrap_or(config.bind_addr), store).await
}

/// Default mode: the TUI client
async fn run_client(demo_flag: bool) -> Result<()> {
    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env()?;

    // In TUI mode logs are captured to a buffer (prevents garbling the display)
    let log_buffer = LogBuffer::new();
    let _file_guard =
        logging::init_tracing(&config.logging, LogOutput::Tui(log_buffer.clone()));

    let api_url = if demo_flag || config.demo_mode {
        let store = Arc::new(Mutex::new(HeroStore::seeded()));
        let (addr, _handle) = server::spawn_ephemeral(store).await?;
        tracing::info!("Running in DEMO MODE against in-memory API on {}", addr);
        format!("http://{}", addr)
    } else {
        config.api_url.clone()
    };

    let messages: Arc<dyn MessageService> = Arc::new(MessageLog::new());
    let service = HttpHeroService::new(&api_url, config.request_timeout(), Arc::clone(&messages))?;
    tracing::info!("Using hero API at {}", api_url);

    let result = tui::run_tui(
        Arc::new(service),
        messages,
        Router::new(DEFAULT_URL),
        log_buffer,
        config.theme_kind().theme(),
    )
    .await;

    if let Err(e) = &result {
        tracing::error!("TUI error: {:?}", e);
    }
    tracing::info!("Shutting down...");
    result
}
