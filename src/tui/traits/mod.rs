//! Component trait system for TUI architecture
//!
//! This module defines the contracts that UI components implement.
//! Instead of App knowing how to render or react for every view,
//! components declare their own capabilities through traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │   (orchestrator: routes keys, completions, route changes)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Heroes  │   │  Detail  │   │   Logs   │
//!        │   View   │   │   View   │   │  Panel   │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! # Traits Overview
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Interactive`] - Components that handle keyboard input
//! - [`Reactive`] - Components that apply finished service calls
//! - [`Scrollable`] - Components with scrollable content

mod component;
mod interactive;
mod reactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
pub use reactive::Reactive;
pub use scrollable::Scrollable;
