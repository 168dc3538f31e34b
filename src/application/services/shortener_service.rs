//! Mapping creation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Service for assigning short codes to URLs.
///
/// Combines random code sampling with store existence checks and an
/// insert-conflict retry loop, so codes stay collision-free under concurrent
/// writers without any core-side locking.
pub struct ShortenerService {
    repository: Arc<dyn MappingRepository>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `max_attempts` bounds both the candidate-resolution loop and the
    /// insert-conflict retry loop; it comes from `MAX_CODE_ATTEMPTS`.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts,
        }
    }

    /// Assigns a short code to `original_url` and persists the mapping.
    ///
    /// The URL must already be validated and normalized by the request
    /// layer; this service does not re-validate format.
    ///
    /// # Idempotency
    ///
    /// If the URL has been shortened before, the existing mapping is
    /// returned and no new record is created.
    ///
    /// # Concurrency
    ///
    /// The existence probe and the insert are not atomic with respect to
    /// other callers: two of them may both observe a candidate as free and
    /// race on the insert. The store's unique constraint decides the winner;
    /// the loser's conflict is recovered here by resolving a fresh code and
    /// inserting again, up to the attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TooManyAttempts`] when the candidate-resolution
    /// or conflict-retry budget is exhausted, and [`AppError::Internal`] on
    /// any other store failure. No record persists on failure.
    pub async fn shorten_url(&self, original_url: String) -> Result<Mapping, AppError> {
        if let Some(existing) = self.repository.find_by_url(&original_url).await? {
            return Ok(existing);
        }

        for attempt in 0..self.max_attempts {
            let code = self.resolve_unique_code().await?;

            let new_mapping = NewMapping {
                code,
                original_url: original_url.clone(),
            };

            match self.repository.insert(new_mapping).await {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::Conflict { .. }) => {
                    metrics::counter!("shorturl_code_insert_conflicts_total").increment(1);
                    tracing::warn!(attempt, "code collision on insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::too_many_attempts(
            "Failed to assign a unique code",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a candidate code that is absent from the store.
    ///
    /// Samples up to `max_attempts` candidates, returning the first one the
    /// store does not know. This is a best-effort filter: the eventual
    /// insert may still conflict, which `shorten_url` recovers from.
    async fn resolve_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..self.max_attempts {
            let code = self.generator.generate();

            if !self.repository.exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::too_many_attempts(
            "Failed to resolve a unique code",
            json!({ "attempts": self.max_attempts }),
        ))
    }
}
