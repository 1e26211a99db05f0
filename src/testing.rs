//! Test doubles and helpers
//!
//! Mocks for the collaborators components are constructed with, plus a
//! couple of helpers to settle spawned calls and read back rendered text.

use crate::hero::{Hero, NewHero};
use crate::router::{Location, Navigator};
use crate::service::{HeroService, TransportError};
use crate::tui::tasks::Tasks;
use crate::tui::traits::Reactive;
use async_trait::async_trait;
use ratatui::{backend::TestBackend, Frame, Terminal};
use std::sync::{Arc, Mutex};

// ─────────────────────────────────────────────────────────────────────────────
// Hero service
// ─────────────────────────────────────────────────────────────────────────────

/// A call the mock service received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(u32),
    Create(NewHero),
    Update(Hero),
    Delete(Hero),
}

#[derive(Default)]
struct MockState {
    heroes: Vec<Hero>,
    hero: Option<Hero>,
    created: Option<Hero>,
    failing: bool,
    calls: Vec<Call>,
}

/// Hero service that answers from canned values and records every call
#[derive(Default, Clone)]
pub struct MockHeroService {
    state: Arc<Mutex<MockState>>,
}

impl MockHeroService {
    pub fn new() -> Self {
        Self::default()
    }

    /// `list()` returns these
    pub fn with_heroes(self, heroes: Vec<Hero>) -> Self {
        self.state.lock().unwrap().heroes = heroes;
        self
    }

    /// `get()` returns this hero whatever the id
    pub fn returning_hero(self, hero: Hero) -> Self {
        self.state.lock().unwrap().hero = Some(hero);
        self
    }

    /// `create()` returns this hero
    pub fn returning_created(&self, hero: Hero) {
        self.state.lock().unwrap().created = Some(hero);
    }

    /// Every call fails from now on
    pub fn fail_all(&self) {
        self.state.lock().unwrap().failing = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| matches(c)).count()
    }

    fn record(&self, call: Call, operation: &'static str) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing {
            Err(TransportError::new(operation, "mock failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl HeroService for MockHeroService {
    async fn list(&self) -> Result<Vec<Hero>, TransportError> {
        self.record(Call::List, "getHeroes")?;
        Ok(self.state.lock().unwrap().heroes.clone())
    }

    async fn get(&self, id: u32) -> Result<Hero, TransportError> {
        self.record(Call::Get(id), "getHero")?;
        self.state
            .lock()
            .unwrap()
            .hero
            .clone()
            .ok_or_else(|| TransportError::new("getHero", "no hero configured"))
    }

    async fn create(&self, hero: NewHero) -> Result<Hero, TransportError> {
        self.record(Call::Create(hero.clone()), "addHero")?;
        let created = self.state.lock().unwrap().created.clone();
        Ok(created.unwrap_or_else(|| Hero::new(99, hero.name, 10)))
    }

    async fn update(&self, hero: &Hero) -> Result<(), TransportError> {
        self.record(Call::Update(hero.clone()), "updateHero")
    }

    async fn delete(&self, hero: &Hero) -> Result<(), TransportError> {
        self.record(Call::Delete(hero.clone()), "deleteHero")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

/// Navigator that records where a link would have gone instead of routing
#[derive(Default)]
pub struct RouterLinkStub {
    navigated_to: Mutex<Option<String>>,
}

impl RouterLinkStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigated_to(&self) -> Option<String> {
        self.navigated_to.lock().unwrap().clone()
    }
}

impl Navigator for RouterLinkStub {
    fn navigate(&self, url: &str) {
        *self.navigated_to.lock().unwrap() = Some(url.to_string());
    }
}

/// Location that counts `back()` calls
#[derive(Default)]
pub struct MockLocation {
    backs: Mutex<usize>,
}

impl MockLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back_calls(&self) -> usize {
        *self.backs.lock().unwrap()
    }
}

impl Location for MockLocation {
    fn back(&self) {
        *self.backs.lock().unwrap() += 1;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Wait for every spawned call and feed the results to `component`
///
/// Repeats until nothing is in flight, so calls spawned while handling a
/// completion settle too.
pub async fn flush<C: Reactive>(component: &mut C, tasks: &mut Tasks) {
    while let Some(completion) = tasks.next().await {
        component.on_completion(completion);
    }
}

/// Draw into an off-screen terminal and return its text, one line per row
pub fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..height {
        for x in 0..width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}
