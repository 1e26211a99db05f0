// Title bar component
//
// Renders the app title, the current url and a spinner while service calls
// are in flight.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let activity = match app.in_flight {
        0 => String::new(),
        1 => format!(" {} loading", app.spinner_char()),
        n => format!(" {} {} requests", app.spinner_char(), n),
    };

    let title_text = format!(" Tour of Heroes ──── {}{}", app.current_url(), activity);

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(format!(" v{} ", crate::config::VERSION)).right_aligned()),
        );

    f.render_widget(title, area);
}
