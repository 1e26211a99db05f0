//! Reactive trait for components that consume service completions
//!
//! A view spawns calls into `Tasks`; when one finishes, the App hands the
//! `Completion` back through this trait. Completions meant for some other
//! view are ignored.

use super::Component;
use crate::tui::tasks::Completion;

pub trait Reactive: Component {
    /// Apply a finished service call to the component's state
    fn on_completion(&mut self, completion: Completion);
}
