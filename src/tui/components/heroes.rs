//! Hero list view (`/heroes`)
//!
//! Owns the in-memory hero list for as long as it is the active view:
//! loads it on `init`, appends on add, and removes on delete. One
//! `HeroComponent` row is rendered per hero, and their `HeroEvent`s are routed
//! back here by index.
//!
//! Delete is local-first: the row disappears immediately and the backend
//! call runs behind it. A failed remote delete is logged by the service and
//! the row stays gone.

use super::hero::{HeroComponent, HeroEvent};
use super::text_input::TextInput;
use crate::hero::{Hero, NewHero};
use crate::router::Navigator;
use crate::service::HeroService;
use crate::tui::tasks::{Completion, Tasks};
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, Reactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, List, Paragraph},
    Frame,
};
use std::sync::Arc;

/// What keys currently drive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeroesMode {
    /// Moving through the list
    #[default]
    Browse,
    /// Typing a new hero's name
    Adding,
}

pub struct HeroesComponent {
    heroes: Vec<Hero>,
    service: Arc<dyn HeroService>,
    navigator: Arc<dyn Navigator>,

    /// Highlighted row
    pub selected: Option<usize>,
    pub mode: HeroesMode,
    /// "Hero name" field for adding
    pub new_name: TextInput,
}

impl HeroesComponent {
    pub fn new(service: Arc<dyn HeroService>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            heroes: Vec::new(),
            service,
            navigator,
            selected: None,
            mode: HeroesMode::default(),
            new_name: TextInput::new(),
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Replace the list outright
    pub fn set_heroes(&mut self, heroes: Vec<Hero>) {
        self.heroes = heroes;
        self.clamp_selection();
    }

    /// Request the full list
    pub fn init(&mut self, tasks: &mut Tasks) {
        let service = Arc::clone(&self.service);
        tasks.spawn(async move { Completion::HeroesLoaded(service.list().await) });
    }

    /// Create a hero named `name` (trimmed); blank names are ignored
    pub fn add(&mut self, name: &str, tasks: &mut Tasks) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        let service = Arc::clone(&self.service);
        let hero = NewHero::named(name);
        tasks.spawn(async move { Completion::HeroCreated(service.create(hero).await) });
    }

    /// Remove `hero` from the list now and delete it on the backend
    pub fn delete(&mut self, hero: &Hero, tasks: &mut Tasks) {
        if let Some(index) = self.heroes.iter().position(|h| h == hero) {
            self.heroes.remove(index);
            self.clamp_selection();
        }

        let service = Arc::clone(&self.service);
        let hero = hero.clone();
        tasks.spawn(async move {
            let result = service.delete(&hero).await;
            Completion::HeroDeleted { hero, result }
        });
    }

    /// One row component per hero, in list order
    pub fn children(&self) -> Vec<HeroComponent> {
        self.heroes.iter().cloned().map(HeroComponent::new).collect()
    }

    /// Handle an event raised by the row at `index`
    pub fn on_item_event(&mut self, index: usize, event: HeroEvent, tasks: &mut Tasks) {
        let Some(hero) = self.heroes.get(index).cloned() else {
            return;
        };

        match event {
            HeroEvent::Delete => self.delete(&hero, tasks),
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = match (self.selected, self.heroes.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
    }

    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(idx) if idx + 1 < self.heroes.len() => Some(idx + 1),
            None if !self.heroes.is_empty() => Some(0),
            other => other,
        };
    }

    fn select_previous(&mut self) {
        self.selected = match self.selected {
            Some(idx) => Some(idx.saturating_sub(1)),
            None if !self.heroes.is_empty() => Some(0),
            None => None,
        };
    }

    fn handle_adding_key(&mut self, key: KeyEvent, tasks: &mut Tasks) -> Handled {
        match key.code {
            KeyCode::Enter => {
                let name = self.new_name.take();
                self.add(&name, tasks);
                self.mode = HeroesMode::Browse;
                Handled::Yes
            }
            KeyCode::Esc => {
                self.new_name.clear();
                self.mode = HeroesMode::Browse;
                Handled::Yes
            }
            _ => self.new_name.handle_key(key).into(),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, tasks: &mut Tasks) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Enter => {
                // Follow the selected row's link
                if let Some(row) = self.selected.and_then(|i| self.children().into_iter().nth(i)) {
                    row.link().click(self.navigator.as_ref());
                }
                Handled::Yes
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(idx) = self.selected {
                    if let Some(row) = self.children().get(idx) {
                        let event = row.on_delete_click();
                        self.on_item_event(idx, event, tasks);
                    }
                }
                Handled::Yes
            }
            KeyCode::Char('a') => {
                self.mode = HeroesMode::Adding;
                Handled::Yes
            }
            _ => Handled::No,
        }
    }
}

impl Component for HeroesComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Heroes
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(" My Heroes ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        // Add field
        let adding = self.mode == HeroesMode::Adding;
        let label_style = Style::default().fg(if adding { theme.highlight } else { theme.muted });
        let input = Paragraph::new(self.new_name.line("Hero name: ", label_style, adding))
            .style(Style::default().fg(theme.foreground));
        f.render_widget(input, chunks[0]);

        // Rows: window the list so the selection stays on screen
        let list_area = chunks[1];
        let height = list_area.height as usize;
        let offset = match self.selected {
            Some(idx) if height > 0 && idx >= height => idx + 1 - height,
            _ => 0,
        };

        let items: Vec<_> = self
            .children()
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(idx, row)| {
                let selected = focused && !adding && self.selected == Some(idx);
                row.list_item(list_area.width as usize, selected, theme)
            })
            .collect();

        f.render_widget(List::new(items), list_area);
    }
}

impl Interactive for HeroesComponent {
    fn handle_key(&mut self, key: KeyEvent, tasks: &mut Tasks) -> Handled {
        match self.mode {
            HeroesMode::Adding => self.handle_adding_key(key, tasks),
            HeroesMode::Browse => self.handle_browse_key(key, tasks),
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self.mode {
            HeroesMode::Browse => Some("↑↓:select  Enter:details  a:add  d:delete  c:clear messages  q:quit"),
            HeroesMode::Adding => Some("type a name  Enter:add  Esc:cancel"),
        }
    }
}

impl Reactive for HeroesComponent {
    fn on_completion(&mut self, completion: Completion) {
        match completion {
            Completion::HeroesLoaded(Ok(heroes)) => {
                tracing::debug!("Loaded {} heroes", heroes.len());
                self.set_heroes(heroes);
            }
            Completion::HeroCreated(Ok(hero)) => {
                self.heroes.push(hero);
                self.clamp_selection();
            }
            Completion::HeroDeleted { hero, result } => {
                // Local removal already happened; nothing to undo
                if result.is_err() {
                    tracing::debug!("Remote delete of hero {} failed, keeping local removal", hero.id);
                }
            }
            // Failures were reported by the service; leave the list as is
            Completion::HeroesLoaded(Err(_)) | Completion::HeroCreated(Err(_)) => {}
            Completion::HeroLoaded(_) | Completion::HeroUpdated(_) => {
                tracing::debug!("Ignoring detail completion in hero list");
            }
        }
    }
}
