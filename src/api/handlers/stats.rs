//! Handler for per-code click statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the click count and creation time for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Consistency
///
/// Increments are applied asynchronously, so the count may briefly trail
/// redirects that are still in flight.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.stats_by_code(&code).await?;

    Ok(Json(StatsResponse {
        code,
        clicks: stats.click_count,
        created_at: stats.created_at,
    }))
}
