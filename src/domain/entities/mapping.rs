//! Mapping entity binding a short code to its original URL.

use chrono::{DateTime, Utc};

/// A persisted short-code mapping.
///
/// `code` and `original_url` are immutable once the record is created;
/// `click_count` only ever grows, one increment per successful resolution.
#[derive(Debug, Clone)]
pub struct Mapping {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new mapping.
///
/// `created_at` and `click_count` are assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub code: String,
    pub original_url: String,
}

/// Read-only counter projection of a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingStats {
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}
