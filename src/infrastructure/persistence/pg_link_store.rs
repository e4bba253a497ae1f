//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{InsertOutcome, LinkStore};
use crate::error::AppError;

/// Row shape shared by every query against `short_links`.
#[derive(Debug, sqlx::FromRow)]
struct ShortLinkRow {
    code: String,
    target_url: String,
    is_custom: bool,
    created_at: DateTime<Utc>,
    hit_count: i64,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.code,
            row.target_url,
            row.is_custom,
            row.created_at,
            row.hit_count,
        )
    }
}

/// PostgreSQL store for short link mappings.
///
/// Uniqueness rests on the `short_links` primary key: inserts use
/// `ON CONFLICT (code) DO NOTHING`, so a racing writer observes zero returned
/// rows instead of a constraint error, and the existing row is never modified.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store over a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Counts all stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<InsertOutcome, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (code, target_url, is_custom)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, target_url, is_custom, created_at, hit_count
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .bind(new_link.is_custom)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(match row {
            Some(row) => InsertOutcome::Created(row.into()),
            None => InsertOutcome::AlreadyExists,
        })
    }

    async fn lookup(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT code, target_url, is_custom, created_at, hit_count
            FROM short_links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn increment_hits(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE short_links SET hit_count = hit_count + 1 WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
