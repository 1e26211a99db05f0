//! In-memory hero API
//!
//! Serves the same `api/heroes` surface the client talks to, backed by a
//! `HeroStore` held in memory. Used by `heroes serve`, by demo mode and by
//! the service tests.

mod store;

pub use store::HeroStore;

use crate::hero::{Hero, NewHero};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Store shared between request handlers
pub type SharedStore = Arc<Mutex<HeroStore>>;

/// Body accepted by PUT. The id in the path wins over any id in the body.
#[derive(Debug, Deserialize)]
struct HeroUpdate {
    name: String,
    strength: i32,
}

/// Build the API router over a store
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/heroes", get(list_heroes).post(add_hero))
        .route(
            "/api/heroes/:id",
            get(get_hero).put(update_hero).delete(delete_hero),
        )
        .with_state(store)
}

/// Bind `bind_addr` and serve until Ctrl-C
pub async fn serve(bind_addr: SocketAddr, store: SharedStore) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .context("Failed to bind to address")?;

    tracing::info!("Hero API listening on {}", bind_addr);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("Hero API shut down gracefully");
    Ok(())
}

/// Serve on an ephemeral localhost port in the background
///
/// Returns the bound address; the server lives as long as the runtime
/// (or until the handle is aborted).
pub async fn spawn_ephemeral(store: SharedStore) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind ephemeral port")?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router(store)).await {
            tracing::error!("In-memory hero API stopped: {}", e);
        }
    });

    tracing::debug!("In-memory hero API on {}", addr);
    Ok((addr, handle))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

async fn list_heroes(State(store): State<SharedStore>) -> Json<Vec<Hero>> {
    Json(store.lock().unwrap().list().to_vec())
}

async fn get_hero(
    State(store): State<SharedStore>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>, StatusCode> {
    store
        .lock()
        .unwrap()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn add_hero(
    State(store): State<SharedStore>,
    Json(hero): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let created = store.lock().unwrap().create(hero);
    tracing::debug!("Created hero {} ({})", created.id, created.name);
    (StatusCode::CREATED, Json(created))
}

async fn update_hero(
    State(store): State<SharedStore>,
    Path(id): Path<u32>,
    Json(hero): Json<HeroUpdate>,
) -> StatusCode {
    if store.lock().unwrap().update(id, hero.name, hero.strength) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn delete_hero(State(store): State<SharedStore>, Path(id): Path<u32>) -> StatusCode {
    if store.lock().unwrap().delete(id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;

    async fn api() -> (Client, String, SharedStore) {
        let store = Arc::new(Mutex::new(HeroStore::seeded()));
        let (addr, _handle) = spawn_ephemeral(store.clone()).await.unwrap();
        (Client::new(), format!("http://{}/api/heroes", addr), store)
    }

    #[tokio::test]
    async fn test_post_creates_with_next_id() {
        let (client, url, _) = api().await;

        let response = client
            .post(&url)
            .json(&NewHero::named("Hero Bro"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Hero = response.json().await.unwrap();
        assert_eq!(created, Hero::new(21, "Hero Bro", 10));
    }

    #[tokio::test]
    async fn test_put_and_delete_statuses() {
        let (client, url, _) = api().await;
        let hero = Hero::new(12, "Narco", 9);

        let put = client.put(format!("{url}/12")).json(&hero).send().await.unwrap();
        assert_eq!(put.status(), StatusCode::NO_CONTENT);

        let put_missing = client.put(format!("{url}/99")).json(&hero).send().await.unwrap();
        assert_eq!(put_missing.status(), StatusCode::NOT_FOUND);

        let delete = client.delete(format!("{url}/12")).send().await.unwrap();
        assert_eq!(delete.status(), StatusCode::NO_CONTENT);

        let delete_again = client.delete(format!("{url}/12")).send().await.unwrap();
        assert_eq!(delete_again.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_missing_and_malformed_ids() {
        let (client, url, _) = api().await;

        let missing = client.get(format!("{url}/99")).send().await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let malformed = client.get(format!("{url}/abc")).send().await.unwrap();
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_put_uses_path_id_over_body_id() {
        let (client, url, store) = api().await;

        let response = client
            .put(format!("{url}/11"))
            .json(&Hero::new(999, "Dr Nicer", 8))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let store = store.lock().unwrap();
        assert_eq!(store.get(11), Some(&Hero::new(11, "Dr Nicer", 8)));
        assert_eq!(store.get(999), None);
    }
}
