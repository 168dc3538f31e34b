//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Mapping, MappingStats, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, map_sqlx_error};
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// The `mappings_code_key` unique constraint arbitrates concurrent code
/// assignment, and the click counter is updated with a relative `UPDATE`
/// so concurrent resolutions never lose increments.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn mapping_from_row(row: &PgRow) -> Result<Mapping, sqlx::Error> {
    Ok(Mapping::new(
        row.try_get("id")?,
        row.try_get("code")?,
        row.try_get("original_url")?,
        row.try_get("created_at")?,
        row.try_get("click_count")?,
    ))
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO mappings (code, original_url)
            VALUES ($1, $2)
            RETURNING id, code, original_url, created_at, click_count
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                AppError::conflict(
                    "Short code already exists",
                    json!({ "code": new_mapping.code }),
                )
            } else {
                map_sqlx_error(e)
            }
        })?;

        Ok(mapping_from_row(&row)?)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, code, original_url, created_at, click_count
            FROM mappings
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(mapping_from_row).transpose()?)
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, code, original_url, created_at, click_count
            FROM mappings
            WHERE original_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.as_ref().map(mapping_from_row).transpose()?)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM mappings WHERE code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE mappings SET click_count = click_count + 1 WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn stats_by_code(&self, code: &str) -> Result<Option<MappingStats>, AppError> {
        let row = sqlx::query("SELECT click_count, created_at FROM mappings WHERE code = $1")
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| -> Result<MappingStats, sqlx::Error> {
            Ok(MappingStats {
                click_count: r.try_get("click_count")?,
                created_at: r.try_get("created_at")?,
            })
        })
        .transpose()
        .map_err(Into::into)
    }
}
