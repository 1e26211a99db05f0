//! Hero row component
//!
//! Leaf component for one entry in the hero list. It takes a hero as input
//! and reports its delete control as a `HeroEvent` back to the parent. The
//! parent already knows which entry the row belongs to, so the event has no
//! payload. The row carries a link to the hero's detail page.

use super::formatters::truncate_to_width;
use crate::hero::Hero;
use crate::router::RouterLink;
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Events a hero row raises to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroEvent {
    /// The row's delete control was activated
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroComponent {
    pub hero: Hero,
    link: RouterLink,
}

impl HeroComponent {
    pub fn new(hero: Hero) -> Self {
        let link = RouterLink::to(format!("/detail/{}", hero.id));
        Self { hero, link }
    }

    /// Link to this hero's detail page
    pub fn link(&self) -> &RouterLink {
        &self.link
    }

    /// Delete control activated
    pub fn on_delete_click(&self) -> HeroEvent {
        HeroEvent::Delete
    }

    /// Row as a list item, name truncated to `width` columns
    pub fn list_item(&self, width: usize, selected: bool, theme: &Theme) -> ListItem<'static> {
        let id = format!("{:>4} ", self.hero.id);
        let name = truncate_to_width(&self.hero.name, width.saturating_sub(id.len()));

        let line = if selected {
            Line::from(format!("{}{}", id, name)).style(theme.selected_style())
        } else {
            Line::from(vec![
                Span::styled(id, Style::default().fg(theme.hero_id)),
                Span::styled(
                    name,
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ])
        };

        ListItem::new(line)
    }
}

impl Component for HeroComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Hero
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let item = self.list_item(area.width as usize, false, ctx.theme);
        f.render_widget(List::new(vec![item]), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{render_to_string, RouterLinkStub};

    fn testhero() -> Hero {
        Hero::new(1, "testhero", 8)
    }

    #[test]
    fn test_has_the_correct_hero() {
        let component = HeroComponent::new(testhero());
        assert_eq!(component.hero.name, "testhero");
    }

    #[test]
    fn test_renders_the_hero_name() {
        let component = HeroComponent::new(testhero());
        let theme = Theme::default();
        let ctx = RenderContext::new(&theme, ComponentId::Heroes);

        let screen = render_to_string(30, 1, |f| {
            let area = f.area();
            component.render(f, area, &ctx)
        });

        assert!(screen.contains("testhero"));
        assert!(screen.contains('1'));
    }

    #[test]
    fn test_link_routes_to_detail() {
        let component = HeroComponent::new(testhero());
        let navigator = RouterLinkStub::new();

        component.link().click(&navigator);

        assert_eq!(navigator.navigated_to().as_deref(), Some("/detail/1"));
    }

    #[test]
    fn test_delete_click_emits_delete() {
        let component = HeroComponent::new(testhero());
        assert_eq!(component.on_delete_click(), HeroEvent::Delete);
    }
}
