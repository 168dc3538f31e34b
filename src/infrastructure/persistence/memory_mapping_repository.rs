//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

struct StoredMapping {
    id: i64,
    original_url: String,
    created_at: chrono::DateTime<Utc>,
    click_count: i64,
}

/// In-process mapping store used by tests and local experiments.
///
/// Mirrors the PostgreSQL semantics the services rely on: insert fails with a
/// conflict when the code is taken, and increments are applied under the
/// write lock so concurrent resolutions never lose updates.
pub struct InMemoryMappingRepository {
    records: RwLock<HashMap<String, StoredMapping>>,
    next_id: std::sync::atomic::AtomicI64,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: std::sync::atomic::AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mut records = self.records.write().await;

        if records.contains_key(&new_mapping.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_mapping.code }),
            ));
        }

        let id = self
            .next_id
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let created_at = Utc::now();

        records.insert(
            new_mapping.code.clone(),
            StoredMapping {
                id,
                original_url: new_mapping.original_url.clone(),
                created_at,
                click_count: 0,
            },
        );

        Ok(Mapping::new(
            id,
            new_mapping.code,
            new_mapping.original_url,
            created_at,
            0,
        ))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        let records = self.records.read().await;

        Ok(records.get(code).map(|stored| {
            Mapping::new(
                stored.id,
                code.to_string(),
                stored.original_url.clone(),
                stored.created_at,
                stored.click_count,
            )
        }))
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError> {
        let records = self.records.read().await;

        Ok(records
            .iter()
            .filter(|(_, stored)| stored.original_url == original_url)
            .min_by_key(|(_, stored)| stored.id)
            .map(|(code, stored)| {
                Mapping::new(
                    stored.id,
                    code.clone(),
                    stored.original_url.clone(),
                    stored.created_at,
                    stored.click_count,
                )
            }))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.records.read().await.contains_key(code))
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        let mut records = self.records.write().await;

        // Unknown code is a no-op, matching zero-row UPDATE semantics.
        if let Some(stored) = records.get_mut(code) {
            stored.click_count += 1;
        }

        Ok(())
    }

    async fn stats_by_code(&self, code: &str) -> Result<Option<MappingStats>, AppError> {
        let records = self.records.read().await;

        Ok(records.get(code).map(|stored| MappingStats {
            click_count: stored.click_count,
            created_at: stored.created_at,
        }))
    }
}
