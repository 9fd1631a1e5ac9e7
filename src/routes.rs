//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /api/urls/{id}`           - Resolve a short code (public)
//! - `GET    /api/new-short-id`        - Short code availability probe
//! - `POST   /api/create-short-url`    - Create a short URL
//! - `GET    /api/session-urls`        - List a session's records
//! - `DELETE /api/delete-id`           - Owner-authorized delete
//! - `DELETE /api/delete-expired-ids`  - Expiration sweep
//! - `GET    /health`                  - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured site origins only
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    create_short_url_handler, delete_handler, health_handler, new_short_id_handler,
    purge_expired_handler, resolve_handler, session_urls_handler,
};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `allowed_origins` feeds the CORS allowlist; see
/// [`crate::config::Config::allowed_origins`].
pub fn app_router(state: AppState, allowed_origins: &[String]) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/api/urls/{id}", get(resolve_handler))
        .route("/api/new-short-id", get(new_short_id_handler))
        .route("/api/create-short-url", post(create_short_url_handler))
        .route("/api/session-urls", get(session_urls_handler))
        .route("/api/delete-id", delete(delete_handler))
        .route("/api/delete-expired-ids", delete(purge_expired_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
