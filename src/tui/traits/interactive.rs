//! Interactive trait for components that handle keyboard input
//!
//! Components that can receive and process keyboard events implement
//! this trait. The App routes input to the focused component.

use super::Component;
use crate::tui::tasks::Tasks;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for components that handle keyboard input
///
/// When a key event arrives, the App routes it to the focused component.
/// The component decides whether to handle it or let it bubble up.
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (Ctrl-C only)
///    │
///    ▼
/// Focused Component (via Interactive trait)
///    │  may spawn service calls into `tasks`
///    │  returns Handled::Yes or Handled::No
///    ▼
/// App (fallback handlers: q, c, PageUp/PageDown)
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_key(&mut self, key: KeyEvent, tasks: &mut Tasks) -> Handled;

    /// Hint text for the hint bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
