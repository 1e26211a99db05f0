// Messages panel component
//
// Shows the shared activity feed the hero service writes to, newest at the
// bottom. Hidden entirely while the feed is empty.

use crate::messages::MessageService;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;

pub struct MessagesPanel {
    messages: Arc<dyn MessageService>,
}

impl MessagesPanel {
    pub fn new(messages: Arc<dyn MessageService>) -> Self {
        Self { messages }
    }

    /// Empty the feed
    pub fn clear(&self) {
        self.messages.clear();
    }
}

impl Component for MessagesPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Messages
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let messages = self.messages.messages();
        if messages.is_empty() {
            return;
        }

        let theme = ctx.theme;
        let visible = area.height.saturating_sub(2) as usize;
        let skip = messages.len().saturating_sub(visible);
        let lines: Vec<Line> = messages.into_iter().skip(skip).map(Line::from).collect();

        let panel = Paragraph::new(lines)
            .style(Style::default().fg(theme.foreground))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(theme.border_style(false))
                    .title(" Messages ")
                    .title_bottom(Line::from(" c: clear ").right_aligned()),
            );
        f.render_widget(panel, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageLog;
    use crate::testing::render_to_string;
    use crate::tui::theme::Theme;

    fn screen(panel: &MessagesPanel) -> String {
        let theme = Theme::default();
        let ctx = RenderContext::new(&theme, ComponentId::Heroes);
        render_to_string(40, 4, |f| {
            let area = f.area();
            panel.render(f, area, &ctx)
        })
    }

    #[test]
    fn test_shows_latest_messages() {
        let log = MessageLog::new();
        log.add("HeroService: fetched heroes".to_string());
        log.add("HeroService: fetched hero id=12".to_string());
        log.add("HeroService: deleted hero id=12".to_string());
        let panel = MessagesPanel::new(Arc::new(log));

        let screen = screen(&panel);
        assert!(screen.contains("deleted hero id=12"));
        assert!(screen.contains("fetched hero id=12"));
        assert!(!screen.contains("fetched heroes"));
    }

    #[test]
    fn test_hidden_when_empty() {
        let log = MessageLog::new();
        log.add("HeroService: fetched heroes".to_string());
        let panel = MessagesPanel::new(Arc::new(log.clone()));

        panel.clear();

        assert!(log.messages().is_empty());
        assert!(!screen(&panel).contains("Messages"));
    }
}
