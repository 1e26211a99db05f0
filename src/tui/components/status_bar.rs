// Status bar component
//
// One line at the bottom: key hints for the active view on the left, the
// message count on the right.

use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Render the status bar with key hints
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let hint = app.focus_hint().unwrap_or("q:quit");
    let counts = format!("{} messages  PgUp/PgDn:logs ", app.message_count());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(counts.len() as u16)])
        .split(area);

    let muted = Style::default().fg(app.theme.muted);
    f.render_widget(Paragraph::new(format!(" {}", hint)).style(muted), chunks[0]);
    f.render_widget(
        Paragraph::new(Line::from(counts).right_aligned()).style(muted),
        chunks[1],
    );
}
