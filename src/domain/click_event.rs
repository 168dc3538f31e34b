//! Click event model for asynchronous counter updates.

/// A pending click-count increment for a resolved code.
///
/// Created by the redirect path after a successful lookup and sent over a
/// bounded channel to [`crate::domain::click_worker::run_click_worker`]. The
/// redirect response never waits for the increment: if the queue is full the
/// event is dropped and only logged.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
