//! journal library - learning journal web service
//!
//! JSON REST API over SQLite for journal entries, plus an embedded
//! browser client.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod validate;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/api/entries",
            get(api::list_entries).post(api::create_entry),
        )
        .route(
            "/api/entries/:id",
            get(api::get_entry)
                .put(api::update_entry)
                .delete(api::delete_entry),
        )
        .merge(api::health_routes())
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .with_state(state)
        .layer(cors)
}

/// Cross-origin policy applied to all routes.
///
/// Permissive unless an allowed origin is configured; an unparsable
/// configured origin falls back to permissive with a warning rather than
/// refusing to start.
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    match allowed_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(value)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => {
                warn!("Invalid CLIENT_ORIGIN {:?}, allowing all origins", origin);
                CorsLayer::permissive()
            }
        },
        None => CorsLayer::permissive(),
    }
}
