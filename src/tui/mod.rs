// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, finished service calls)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod scroll;
pub mod tasks;
pub mod theme;
pub mod traits;
pub mod views;

use crate::logging::LogBuffer;
use crate::messages::MessageService;
use crate::router::Router;
use crate::service::HeroService;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tasks::{Completion, Tasks};
use theme::Theme;

/// What woke the event loop
enum Step {
    /// A key press, or nothing within the poll window
    Input(Option<KeyEvent>),
    /// Animation tick
    Tick,
    /// A service call finished
    Completed(Completion),
}

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal even if the loop failed.
pub async fn run_tui(
    service: Arc<dyn HeroService>,
    messages: Arc<dyn MessageService>,
    router: Router,
    log_buffer: LogBuffer,
    theme: Theme,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(service, messages, router, log_buffer, theme);
    let mut tasks = Tasks::new();

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut tasks).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Finished service calls are checked first so a slow terminal poll never
/// starves them; each is applied fully before the next key is read.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tasks: &mut Tasks,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    // Load the initial view
    app.sync_route(tasks);

    loop {
        app.in_flight = tasks.in_flight();
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        let step = tokio::select! {
            biased;

            Some(completion) = tasks.next() => Step::Completed(completion),

            _ = tick_interval.tick() => Step::Tick,

            key = poll_key() => Step::Input(key),
        };

        match step {
            Step::Completed(completion) => app.on_completion(completion, tasks),
            Step::Tick => app.tick_animation(),
            Step::Input(Some(key)) => app.handle_key(key, tasks),
            Step::Input(None) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Wait briefly for a key press
async fn poll_key() -> Option<KeyEvent> {
    if !event::poll(Duration::from_millis(10)).unwrap_or(false) {
        return None;
    }

    match event::read() {
        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(key),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Failed to read terminal event: {}", e);
            None
        }
    }
}
