//! Hero detail view (`/detail/:id`)
//!
//! Loads one hero by the route's `id` param and edits its name in place.
//! Saving sends the whole hero to the service and goes back once the update
//! succeeds. Going back without saving discards nothing on the backend, since
//! nothing was sent.

use super::text_input::TextInput;
use crate::hero::Hero;
use crate::router::{Location, RouteSnapshot};
use crate::service::HeroService;
use crate::tui::tasks::{Completion, Tasks};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, Reactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState {
    /// Waiting for `get()` (or the id never parsed)
    Loading,
    /// Hero shown and editable
    Loaded,
    /// `update()` in flight
    Saving,
    /// Left the view
    NavigatedBack,
}

pub struct HeroDetailComponent {
    service: Arc<dyn HeroService>,
    route: RouteSnapshot,
    location: Arc<dyn Location>,

    pub state: DetailState,
    hero: Option<Hero>,
    name: TextInput,
}

impl HeroDetailComponent {
    pub fn new(
        service: Arc<dyn HeroService>,
        route: RouteSnapshot,
        location: Arc<dyn Location>,
    ) -> Self {
        Self {
            service,
            route,
            location,
            state: DetailState::Loading,
            hero: None,
            name: TextInput::new(),
        }
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    /// Request the hero named by the route's `id`
    pub fn init(&mut self, tasks: &mut Tasks) {
        let raw = self.route.param("id").unwrap_or_default();
        let Ok(id) = raw.parse::<u32>() else {
            tracing::warn!("Invalid hero id {:?} in {}", raw, self.route.url);
            return;
        };

        let service = Arc::clone(&self.service);
        tasks.spawn(async move { Completion::HeroLoaded(service.get(id).await) });
    }

    /// Send the edited hero and go back once it is stored
    pub fn save(&mut self, tasks: &mut Tasks) {
        if self.state != DetailState::Loaded {
            return;
        }
        let Some(hero) = self.hero.clone() else {
            return;
        };

        self.state = DetailState::Saving;
        let service = Arc::clone(&self.service);
        tasks.spawn(async move { Completion::HeroUpdated(service.update(&hero).await) });
    }

    /// Leave without saving
    pub fn go_back(&mut self) {
        self.state = DetailState::NavigatedBack;
        self.location.back();
    }

    /// Heading shown above the editor
    pub fn heading(&self) -> Option<String> {
        self.hero
            .as_ref()
            .map(|hero| format!("{} Details", hero.name.to_uppercase()))
    }

    fn edit_name(&mut self, key: KeyEvent) -> Handled {
        let changed = self.name.handle_key(key);
        if let Some(hero) = self.hero.as_mut() {
            hero.name = self.name.value().to_string();
        }
        changed.into()
    }
}

impl Component for HeroDetailComponent {
    fn id(&self) -> ComponentId {
        ComponentId::HeroDetail
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(ctx.is_focused(self.id())))
            .title(" Hero Details ");

        let (Some(hero), Some(heading)) = (self.hero.as_ref(), self.heading()) else {
            let waiting = Paragraph::new(Span::styled(
                "Loading hero…",
                Style::default().fg(theme.muted),
            ))
            .block(block);
            f.render_widget(waiting, area);
            return;
        };

        let label = Style::default().fg(theme.muted);
        let editing = self.state == DetailState::Loaded;
        let status = match self.state {
            DetailState::Saving => "saving…",
            _ => "",
        };

        let lines = vec![
            Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("id: ", label),
                Span::styled(hero.id.to_string(), Style::default().fg(theme.hero_id)),
            ]),
            Line::from(vec![
                Span::styled("strength: ", label),
                Span::raw(hero.strength.to_string()),
            ]),
            self.name.line("name: ", label, editing),
            Line::from(""),
            Line::from(Span::styled(status, Style::default().fg(theme.info))),
        ];

        let body = Paragraph::new(lines)
            .style(Style::default().fg(theme.foreground))
            .block(block);
        f.render_widget(body, area);
    }
}

impl Interactive for HeroDetailComponent {
    fn handle_key(&mut self, key: KeyEvent, tasks: &mut Tasks) -> Handled {
        match key.code {
            KeyCode::Esc => {
                self.go_back();
                Handled::Yes
            }
            KeyCode::Enter => {
                self.save(tasks);
                Handled::Yes
            }
            _ if self.state == DetailState::Loaded => self.edit_name(key),
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type to rename  Enter:save  Esc:back")
    }
}

impl Reactive for HeroDetailComponent {
    fn on_completion(&mut self, completion: Completion) {
        match completion {
            Completion::HeroLoaded(Ok(hero)) => {
                self.name = TextInput::with_value(hero.name.clone());
                self.hero = Some(hero);
                self.state = DetailState::Loaded;
            }
            Completion::HeroLoaded(Err(_)) => {
                // Reported by the service; nothing to show
            }
            Completion::HeroUpdated(Ok(())) => {
                if self.state == DetailState::Saving {
                    self.go_back();
                }
            }
            Completion::HeroUpdated(Err(_)) => {
                if self.state == DetailState::Saving {
                    self.state = DetailState::Loaded;
                }
            }
            Completion::HeroesLoaded(_)
            | Completion::HeroCreated(_)
            | Completion::HeroDeleted { .. } => {
                tracing::debug!("Ignoring list completion in hero detail");
            }
        }
    }
}
