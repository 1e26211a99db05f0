//! reqwest-backed hero service

use super::{HeroService, TransportError};
use crate::hero::{Hero, NewHero};
use crate::messages::MessageService;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Hero service over the `api/heroes` REST endpoints
pub struct HttpHeroService {
    client: reqwest::Client,
    /// Collection url: `{api_url}/api/heroes`
    heroes_url: String,
    messages: Arc<dyn MessageService>,
}

impl HttpHeroService {
    /// Build a service rooted at `api_url` (scheme + host, no trailing path)
    pub fn new(
        api_url: &str,
        timeout: Duration,
        messages: Arc<dyn MessageService>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            heroes_url: format!("{}/api/heroes", api_url.trim_end_matches('/')),
            messages,
        })
    }

    fn hero_url(&self, id: u32) -> String {
        format!("{}/{}", self.heroes_url, id)
    }

    fn log(&self, message: impl std::fmt::Display) {
        let message = format!("HeroService: {}", message);
        tracing::info!(target: "heroes::messages", "{}", message);
        self.messages.add(message);
    }

    /// Report a failure to the message log and hand it back to the caller
    fn handle_error(&self, error: TransportError) -> TransportError {
        let message = format!("HeroService: {}", error);
        tracing::warn!(target: "heroes::messages", "{}", message);
        self.messages.add(message);
        error
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, TransportError> {
        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| TransportError::new(operation, e.to_string()))?;

        tracing::debug!("{} -> {}", operation, response.status());
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, TransportError> {
        self.send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| TransportError::new(operation, e.to_string()))
    }
}

#[async_trait]
impl HeroService for HttpHeroService {
    async fn list(&self) -> Result<Vec<Hero>, TransportError> {
        let heroes = self
            .send_json::<Vec<Hero>>("getHeroes", self.client.get(&self.heroes_url))
            .await
            .map_err(|e| self.handle_error(e))?;

        self.log("fetched heroes");
        Ok(heroes)
    }

    async fn get(&self, id: u32) -> Result<Hero, TransportError> {
        let hero = self
            .send_json::<Hero>("getHero", self.client.get(self.hero_url(id)))
            .await
            .map_err(|e| self.handle_error(e))?;

        self.log(format!("fetched hero id={}", id));
        Ok(hero)
    }

    async fn create(&self, hero: NewHero) -> Result<Hero, TransportError> {
        let created = self
            .send_json::<Hero>("addHero", self.client.post(&self.heroes_url).json(&hero))
            .await
            .map_err(|e| self.handle_error(e))?;

        self.log(format!("added hero w/ id={}", created.id));
        Ok(created)
    }

    async fn update(&self, hero: &Hero) -> Result<(), TransportError> {
        self.send("updateHero", self.client.put(self.hero_url(hero.id)).json(hero))
            .await
            .map_err(|e| self.handle_error(e))?;

        self.log(format!("updated hero id={}", hero.id));
        Ok(())
    }

    async fn delete(&self, hero: &Hero) -> Result<(), TransportError> {
        self.send("deleteHero", self.client.delete(self.hero_url(hero.id)))
            .await
            .map_err(|e| self.handle_error(e))?;

        self.log(format!("deleted hero id={}", hero.id));
        Ok(())
    }
}
