//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`          - Short link redirect
//! - `POST /api/shorten`     - Create a short code
//! - `GET  /api/stats/{code}`- Click statistics
//! - `GET  /api/health`      - Health check: store, click queue
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
