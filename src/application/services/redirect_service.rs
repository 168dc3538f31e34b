//! Code resolution service backing the redirect path.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Service resolving short codes back to their original URLs.
///
/// Every successful resolution schedules a click-count increment on the
/// bounded worker channel. The increment is decoupled from the response: a
/// resolution succeeds once the URL is found, whatever later happens to the
/// counter update.
pub struct RedirectService {
    repository: Arc<dyn MappingRepository>,
    click_tx: mpsc::Sender<ClickEvent>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<dyn MappingRepository>, click_tx: mpsc::Sender<ClickEvent>) -> Self {
        Self {
            repository,
            click_tx,
        }
    }

    /// Resolves a code to its original URL and schedules the click increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is not assigned.
    /// Returns [`AppError::Internal`] on store failures during the lookup.
    pub async fn resolve_url(&self, code: &str) -> Result<String, AppError> {
        let mapping = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown code", json!({ "code": code })))?;

        // Queue full or worker gone: the redirect is still served.
        if let Err(e) = self.click_tx.try_send(ClickEvent::new(&mapping.code)) {
            metrics::counter!("shorturl_click_events_dropped_total").increment(1);
            tracing::warn!(code = %mapping.code, error = %e, "failed to enqueue click event");
        }

        Ok(mapping.original_url)
    }
}
