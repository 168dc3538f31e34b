//! DTOs for the per-code statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Click statistics for a specific short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}
