//! Host for the idea board frontend.
//!
//! Serves the compiled egui bundle and tells each browser where the ideas
//! API lives. The API itself is a separate service; nothing here proxies or
//! stores ideas.
//!
//! # Routes
//!
//! - `GET /`: `index.html` with the client config injected
//! - `GET /health`: liveness probe
//! - anything else: embedded static assets, or the injected `index.html`
//!   for `/index.html` and unknown paths

pub mod assets;
pub mod config;
pub mod error;

pub use assets::{IndexPage, missing_bundle_files, static_handler};
pub use config::HostConfig;
pub use error::HostError;

use axum::{Json, Router, extract::State, routing::get};
use idea_board::ClientConfig;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Frontend bundle prepared by build.rs.
#[derive(RustEmbed)]
#[folder = "$IDEA_BOARD_FRONTEND_DIST"]
pub struct Assets;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

/// Build the host router over an asset bundle.
pub fn router<A>(client: ClientConfig) -> Router
where
    A: RustEmbed + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<A>))
        .route("/health", get(health))
        .fallback(static_handler::<A>)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(client))
}

async fn index<A>(State(client): State<Arc<ClientConfig>>) -> IndexPage<A>
where
    A: RustEmbed + Send + Sync + 'static,
{
    IndexPage::new(ClientConfig::clone(&client))
}

async fn health() -> Json<Health> {
    Json(Health { status: "healthy" })
}
