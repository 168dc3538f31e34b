//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::normalize_url;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Validation
///
/// The URL is validated and normalized here, before the shortener runs; the
/// core services assume well-formed absolute http(s) URLs.
///
/// # Idempotency
///
/// Shortening the same normalized URL twice returns the same code.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed or non-http(s) URLs.
/// Returns 500 Internal Server Error when the code space is too contended
/// or the store fails; no partial record is left behind.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let normalized_url = normalize_url(&payload.url).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    let mapping = state.shortener_service.shorten_url(normalized_url).await?;

    let short_url = format!(
        "{}/{}",
        state.base_url.trim_end_matches('/'),
        mapping.code
    );

    Ok(Json(ShortenResponse {
        code: mapping.code,
        short_url,
        long_url: mapping.original_url,
    }))
}
