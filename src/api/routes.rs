//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short code for a URL
/// - `GET  /stats/{code}`  - Click statistics for a specific code
/// - `GET  /health`        - Health check: store and click queue
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
}
