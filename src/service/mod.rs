//! Hero data access
//!
//! `HeroService` is the capability the view components are built against.
//! The production implementation talks to the REST API over HTTP; tests
//! hand components a mock instead.
//!
//! Every call completes exactly once. Failures come back as a single
//! `TransportError` kind - there is no distinction between "not found" and
//! "server error" at this level.

mod http;


pub use http::HttpHeroService;

use crate::hero::{Hero, NewHero};
use async_trait::async_trait;
use thiserror::Error;

/// Any failure talking to the hero API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{operation} failed: {reason}")]
pub struct TransportError {
    /// Operation that failed, e.g. "getHeroes"
    pub operation: &'static str,
    pub reason: String,
}

impl TransportError {
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }
}

/// CRUD operations over heroes
#[async_trait]
pub trait HeroService: Send + Sync {
    /// Fetch the full collection, in server order
    async fn list(&self) -> Result<Vec<Hero>, TransportError>;

    /// Fetch one hero by id
    async fn get(&self, id: u32) -> Result<Hero, TransportError>;

    /// Create a hero; the backend assigns the id
    async fn create(&self, hero: NewHero) -> Result<Hero, TransportError>;

    /// Persist a hero by id
    async fn update(&self, hero: &Hero) -> Result<(), TransportError>;

    /// Remove a hero by id
    async fn delete(&self, hero: &Hero) -> Result<(), TransportError>;
}
