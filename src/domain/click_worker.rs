//! Background worker applying click-count increments.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::MappingRepository;

/// Drains the click queue and applies increments to the store.
///
/// Each increment is retried with jittered exponential backoff before being
/// abandoned. Terminal failures are counted and logged; they are never
/// propagated back to the redirect that scheduled them. The worker exits when
/// every sender has been dropped and the queue is drained.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn MappingRepository>,
) {
    while let Some(event) = rx.recv().await {
        let backoff = ExponentialBackoff::from_millis(10).map(jitter).take(3);

        let result = Retry::spawn(backoff, || repository.increment_clicks(&event.code)).await;

        if let Err(e) = result {
            metrics::counter!("shorturl_click_increments_failed_total").increment(1);
            tracing::error!(code = %event.code, error = %e, "abandoning click increment after retries");
        }
    }
}
