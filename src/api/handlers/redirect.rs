//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The redirect service schedules a click-count increment on the worker
/// queue after a successful lookup. The response does not wait for it;
/// counter failures never fail a redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state.redirect_service.resolve_url(&code).await?;

    Ok(Redirect::temporary(&original_url))
}
