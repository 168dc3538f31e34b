//! Repository trait for mapping storage: the store contract the core builds on.

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for short-code mappings.
///
/// All serialization between concurrent callers is delegated to the
/// implementation; the services hold no locks of their own. The unique
/// constraint on `code` is the final arbiter of code assignment, so the
/// exists-then-insert sequence performed by the shortener may still lose a
/// race and must treat [`AppError::Conflict`] from [`insert`] as recoverable.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] -
///   in-process store for tests
/// - Mocks available with `cfg(test)`
///
/// [`insert`]: MappingRepository::insert
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Creates a new mapping with `click_count = 0` and a store-assigned
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] on other store failures.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError>;

    /// Finds a mapping by its original URL.
    ///
    /// Used to return the existing code when the same URL is shortened again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError>;

    /// Checks whether a code is already assigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments the click counter for a code.
    ///
    /// The update is relative (`click_count = click_count + 1` at the store),
    /// so concurrent increments are never lost. An unknown code is a no-op,
    /// matching zero-row UPDATE semantics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// Reads the click counter and creation time for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn stats_by_code(&self, code: &str) -> Result<Option<MappingStats>, AppError>;
}
