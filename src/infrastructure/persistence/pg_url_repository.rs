//! PostgreSQL implementation of the URL record store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Columns selected for every record read.
const RECORD_COLUMNS: &str =
    "id, destination, created_at, short_url, expires_at, session_token, password_hash";

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: String,
    destination: String,
    created_at: DateTime<Utc>,
    short_url: String,
    expires_at: Option<DateTime<Utc>>,
    session_token: String,
    password_hash: Option<String>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord {
            id: row.id,
            destination: row.destination,
            created_at: row.created_at,
            short_url: row.short_url,
            expires_at: row.expires_at,
            session_token: row.session_token,
            password_hash: row.password_hash,
        }
    }
}

/// PostgreSQL repository for URL records.
///
/// Uses bound parameters throughout; the primary key on `id` backs the
/// uniqueness guarantee for inserts.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError> {
        sqlx::query(
            r#"
            INSERT INTO urls (id, destination, created_at, short_url, expires_at, session_token, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&record.id)
        .bind(&record.destination)
        .bind(record.created_at)
        .bind(&record.short_url)
        .bind(record.expires_at)
        .bind(&record.session_token)
        .bind(&record.password_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_unexpired_by_id(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls \
             WHERE id = $1 AND (expires_at IS NULL OR expires_at > $2)"
        ))
        .bind(id)
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_session(&self, session_token: &str) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls \
             WHERE session_token = $1 ORDER BY created_at DESC"
        ))
        .bind(session_token)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn find_expired(&self, now: DateTime<Utc>) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls \
             WHERE expires_at IS NOT NULL AND expires_at < $1"
        ))
        .bind(now)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(&format!(
            "SELECT {RECORD_COLUMNS} FROM urls ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn delete_by_id_and_session(
        &self,
        id: &str,
        session_token: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE id = $1 AND session_token = $2")
            .bind(id)
            .bind(session_token)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<Vec<String>, AppError> {
        let ids = sqlx::query_scalar::<_, String>(
            "DELETE FROM urls WHERE expires_at IS NOT NULL AND expires_at < $1 RETURNING id",
        )
        .bind(now)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(ids)
    }
}
