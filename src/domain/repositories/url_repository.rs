//! Repository trait for short URL records: the record store contract.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage interface for URL records.
///
/// Reads return `Option` / `Vec` so "no rows" stays distinguishable from a
/// store-level failure; the uniqueness resolver depends on that distinction.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a record, relying on the primary-key constraint for
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already taken — this is
    /// the collision signal the uniqueness resolver retries on.
    /// Returns [`AppError::Store`] on any other database error.
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by id regardless of expiration state.
    async fn find_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by id, excluding records expired as of `now`.
    async fn find_unexpired_by_id(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// All records owned by a session token, newest first.
    async fn find_by_session(&self, session_token: &str) -> Result<Vec<UrlRecord>, AppError>;

    /// All records whose expiry is set and strictly before `now`.
    async fn find_expired(&self, now: DateTime<Utc>) -> Result<Vec<UrlRecord>, AppError>;

    /// Every record, newest first. Administrative / sweep use.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Deletes the record iff both id and session token match.
    ///
    /// Returns `Ok(false)` when nothing matched — callers must not be able to
    /// tell "wrong session" apart from "no such id".
    async fn delete_by_id_and_session(
        &self,
        id: &str,
        session_token: &str,
    ) -> Result<bool, AppError>;

    /// Deletes every record expired as of `now`, returning the purged ids.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<Vec<String>, AppError>;
}
