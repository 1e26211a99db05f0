// App state - the shell around the routed views
//
// The App owns whichever view the router currently points at, plus the
// shell panels (messages, system logs). It routes keys and completions to
// the active view and rebuilds the view whenever the router's url changes.

use crate::logging::LogBuffer;
use crate::messages::MessageService;
use crate::router::{Route, Router};
use crate::service::HeroService;
use crate::tui::components::hero_detail::HeroDetailComponent;
use crate::tui::components::heroes::HeroesComponent;
use crate::tui::components::logs_panel::LogsPanel;
use crate::tui::components::messages_panel::MessagesPanel;
use crate::tui::tasks::{Completion, Tasks};
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, Reactive, RenderContext, Scrollable,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

/// Spinner frames for the in-flight indicator
const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// The view the current url resolves to
pub enum ActiveView {
    Heroes(HeroesComponent),
    Detail(HeroDetailComponent),
}

impl Component for ActiveView {
    fn id(&self) -> ComponentId {
        match self {
            ActiveView::Heroes(view) => view.id(),
            ActiveView::Detail(view) => view.id(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        match self {
            ActiveView::Heroes(view) => view.render(f, area, ctx),
            ActiveView::Detail(view) => view.render(f, area, ctx),
        }
    }
}

impl ActiveView {
    fn handle_key(&mut self, key: KeyEvent, tasks: &mut Tasks) -> Handled {
        match self {
            ActiveView::Heroes(view) => view.handle_key(key, tasks),
            ActiveView::Detail(view) => view.handle_key(key, tasks),
        }
    }

    fn on_completion(&mut self, completion: Completion) {
        match self {
            ActiveView::Heroes(view) => view.on_completion(completion),
            ActiveView::Detail(view) => view.on_completion(completion),
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self {
            ActiveView::Heroes(view) => view.focus_hint(),
            ActiveView::Detail(view) => view.focus_hint(),
        }
    }
}

pub struct App {
    router: Router,
    service: Arc<dyn HeroService>,
    messages: Arc<dyn MessageService>,

    /// Routed view and the url it was built for
    view: ActiveView,
    current_url: Option<String>,

    pub theme: Theme,
    pub should_quit: bool,

    // Shell panels
    pub logs_panel: LogsPanel,
    pub messages_panel: MessagesPanel,

    /// Calls in flight, as of the last loop iteration
    pub in_flight: usize,
    animation_frame: usize,
}

impl App {
    /// Build the shell; call `sync_route` once to load the initial view
    pub fn new(
        service: Arc<dyn HeroService>,
        messages: Arc<dyn MessageService>,
        router: Router,
        log_buffer: LogBuffer,
        theme: Theme,
    ) -> Self {
        let view = ActiveView::Heroes(HeroesComponent::new(
            Arc::clone(&service),
            Arc::new(router.clone()),
        ));

        Self {
            router,
            messages_panel: MessagesPanel::new(Arc::clone(&messages)),
            service,
            messages,
            view,
            current_url: None,
            theme,
            should_quit: false,
            logs_panel: LogsPanel::new(log_buffer),
            in_flight: 0,
            animation_frame: 0,
        }
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn current_url(&self) -> &str {
        self.current_url.as_deref().unwrap_or_default()
    }

    /// Number of messages in the activity feed
    pub fn message_count(&self) -> usize {
        self.messages.messages().len()
    }

    pub fn focus_hint(&self) -> Option<&'static str> {
        self.view.focus_hint()
    }

    // ─────────────────────────────────────────────────────────────
    // Routing
    // ─────────────────────────────────────────────────────────────

    /// Rebuild the active view if the router moved since the last call
    pub fn sync_route(&mut self, tasks: &mut Tasks) {
        let url = self.router.current_url();
        if self.current_url.as_deref() == Some(url.as_str()) {
            return;
        }

        let snapshot = self.router.snapshot();
        tracing::debug!("Activating {:?} for {}", snapshot.route, url);

        // Anything the old view still has in flight is no longer wanted
        tasks.advance();

        self.view = match snapshot.route {
            Route::Heroes => {
                let mut view =
                    HeroesComponent::new(Arc::clone(&self.service), Arc::new(self.router.clone()));
                view.init(tasks);
                ActiveView::Heroes(view)
            }
            Route::Detail => {
                let mut view = HeroDetailComponent::new(
                    Arc::clone(&self.service),
                    snapshot,
                    Arc::new(self.router.clone()),
                );
                view.init(tasks);
                ActiveView::Detail(view)
            }
        };
        self.current_url = Some(url);
    }

    // ─────────────────────────────────────────────────────────────
    // Input and completions
    // ─────────────────────────────────────────────────────────────

    /// Route a key: the view first, then the shell fallbacks
    pub fn handle_key(&mut self, key: KeyEvent, tasks: &mut Tasks) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.view.handle_key(key, tasks) == Handled::No {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('c') => self.messages_panel.clear(),
                KeyCode::PageUp => self.logs_panel.page_up(),
                KeyCode::PageDown => self.logs_panel.page_down(),
                _ => {}
            }
        }

        self.sync_route(tasks);
    }

    /// Apply a finished call to the active view
    pub fn on_completion(&mut self, completion: Completion, tasks: &mut Tasks) {
        self.view.on_completion(completion);
        self.sync_route(tasks);
    }

    // ─────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}
