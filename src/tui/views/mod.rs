// Views module - screen-level rendering logic
//
// One screen layout for every route: the shell panels stay put and the
// routed view fills the content slot.
//
//   ┌ title bar ─────────────┐
//   │ routed view            │
//   ├ messages (when any) ───┤
//   ├ system logs ───────────┤
//   └ status bar ────────────┘

use super::app::App;
use crate::tui::components::{status_bar, title_bar};
use crate::tui::traits::{Component, RenderContext};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Messages shown at most before the panel starts dropping the oldest
const MAX_VISIBLE_MESSAGES: usize = 5;

/// Height of the System Logs panel, borders included
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let messages_height = match app.message_count() {
        0 => 0,
        n => n.min(MAX_VISIBLE_MESSAGES) as u16 + 2,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(messages_height),
            Constraint::Length(LOGS_HEIGHT),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Logs follow the buffer, so sync before borrowing the theme
    app.logs_panel
        .sync(chunks[3].height.saturating_sub(2) as usize);

    title_bar::render(f, chunks[0], app);

    let ctx = RenderContext::new(&app.theme, app.view().id());
    app.view().render(f, chunks[1], &ctx);
    app.messages_panel.render(f, chunks[2], &ctx);
    app.logs_panel.render(f, chunks[3], &ctx);

    status_bar::render(f, chunks[4], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::Hero;
    use crate::logging::LogBuffer;
    use crate::messages::{MessageLog, MessageService};
    use crate::router::Router;
    use crate::testing::{render_to_string, MockHeroService};
    use crate::tui::tasks::Tasks;
    use crate::tui::theme::Theme;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_draws_shell_around_hero_list() {
        let service = MockHeroService::new().with_heroes(vec![Hero::new(13, "Bombasto", 12)]);
        let messages = MessageLog::new();
        let mut app = App::new(
            Arc::new(service),
            Arc::new(messages.clone()),
            Router::new("/heroes"),
            LogBuffer::new(),
            Theme::default(),
        );
        let mut tasks = Tasks::new();
        app.sync_route(&mut tasks);
        while let Some(completion) = tasks.next().await {
            app.on_completion(completion, &mut tasks);
        }
        messages.add("HeroService: fetched heroes".to_string());

        let screen = render_to_string(60, 30, |f| draw(f, &mut app));

        assert!(screen.contains("Tour of Heroes"));
        assert!(screen.contains("/heroes"));
        assert!(screen.contains("Bombasto"));
        assert!(screen.contains("HeroService: fetched heroes"));
        assert!(screen.contains("System Logs"));
    }
}
