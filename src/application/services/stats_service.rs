//! Click statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::MappingStats;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Read-only accessor for per-code counters.
///
/// Counters are applied asynchronously by the click worker, so a read may
/// briefly trail in-flight resolutions; it never runs ahead of them.
pub struct StatsService {
    repository: Arc<dyn MappingRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves the click count and creation time for a code.
    ///
    /// Pure read; no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is not assigned.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn stats_by_code(&self, code: &str) -> Result<MappingStats, AppError> {
        self.repository
            .stats_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": code })))
    }
}
