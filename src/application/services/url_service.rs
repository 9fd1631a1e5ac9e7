//! Short URL lifecycle service: creation, lookup, deletion, and the
//! uniqueness guarantee for freshly minted codes.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::length_hint::LengthHint;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::destination::{host_of, validate_destination};
use crate::utils::password;

/// Floor for the candidate code length, whatever the hint says.
const MIN_CODE_LENGTH: i64 = 2;

/// Collisions tolerated at one length before the candidate length grows.
const COLLISION_THRESHOLD: u32 = 10;

/// Outcome of an availability probe for a short code.
#[derive(Debug)]
pub struct CodeSuggestion {
    /// Whether the probed id is already taken.
    pub exists: bool,
    /// The probed id when free, otherwise a fresh non-colliding candidate.
    pub new_id: String,
}

/// Service owning the URL record lifecycle.
///
/// Code uniqueness uses an atomic reserve: each candidate is inserted
/// directly and the store's unique constraint is the collision signal, so two
/// concurrent creates can never both claim the same code.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    length_hint: Arc<dyn LengthHint>,
    generator: CodeGenerator,
    base_url: String,
    base_host: String,
}

impl UrlService {
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        length_hint: Arc<dyn LengthHint>,
        generator: CodeGenerator,
        base_url: &str,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base_host = host_of(&base_url);
        Self {
            repository,
            length_hint,
            generator,
            base_url,
            base_host,
        }
    }

    /// Creates and persists a new short URL record.
    ///
    /// - `self_destruct_seconds > 0` schedules expiry that many seconds after
    ///   creation; anything else means the record never expires.
    /// - A non-empty `password` is scrypt-hashed before persistence; the
    ///   plaintext is never stored.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a malformed or self-referential
    ///   destination
    /// - [`AppError::Upstream`] if the length hint cannot be obtained
    /// - [`AppError::Store`] if persistence fails
    pub async fn create_short_url(
        &self,
        destination: &str,
        self_destruct_seconds: i64,
        session_token: &str,
        password: &str,
    ) -> Result<UrlRecord, AppError> {
        let destination = validate_destination(destination, &self.base_host).map_err(|e| {
            AppError::validation(
                "A URL was not provided or the input was incorrect",
                e.to_string(),
            )
        })?;

        let password_hash = if password.is_empty() {
            None
        } else {
            Some(password::hash_password(password)?)
        };

        let created_at = Utc::now();
        let expires_at =
            (self_destruct_seconds > 0).then(|| created_at + Duration::seconds(self_destruct_seconds));

        let record = self
            .reserve_unique(destination, created_at, expires_at, session_token, password_hash)
            .await?;

        tracing::info!(id = %record.id, expires = record.expires_at.is_some(), "short url created");
        Ok(record)
    }

    /// Generates candidate codes and inserts until the store accepts one.
    ///
    /// The base length comes from the length hint, floored at
    /// [`MIN_CODE_LENGTH`]. More than [`COLLISION_THRESHOLD`] collisions at
    /// one length escalate to the next length and restart the count, growing
    /// the search space instead of failing.
    async fn reserve_unique(
        &self,
        destination: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        session_token: &str,
        password_hash: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        let hint = self.length_hint.code_length().await?;
        let mut length = hint.max(MIN_CODE_LENGTH) as usize;
        let mut collisions: u32 = 0;

        loop {
            let code = self.generator.generate(length)?;
            let candidate = UrlRecord {
                short_url: format!("{}/{}", self.base_url, code),
                id: code,
                destination: destination.clone(),
                created_at,
                expires_at,
                session_token: session_token.to_string(),
                password_hash: password_hash.clone(),
            };

            match self.repository.insert(candidate).await {
                Ok(stored) => return Ok(stored),
                Err(AppError::Conflict { .. }) => {
                    collisions += 1;
                    if collisions > COLLISION_THRESHOLD {
                        tracing::warn!(
                            length,
                            next_length = length + 1,
                            "sustained short code collisions, escalating candidate length"
                        );
                        length += 1;
                        collisions = 0;
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Resolves a short code to its record, excluding expired records and
    /// enforcing password protection.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the id is unknown or expired
    /// - [`AppError::Validation`] if the record is protected and the supplied
    ///   password is missing or wrong
    pub async fn resolve(
        &self,
        id: &str,
        supplied_password: Option<&str>,
    ) -> Result<UrlRecord, AppError> {
        let record = self
            .repository
            .find_unexpired_by_id(id, Utc::now())
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "This URL is invalid or a destination URL could not be found",
                    id,
                )
            })?;

        if let Some(hash) = &record.password_hash
            && !password::verify_password(hash, supplied_password.unwrap_or_default())
        {
            return Err(AppError::validation(
                "This URL is password protected",
                "invalid or missing password",
            ));
        }

        Ok(record)
    }

    /// Probes a code for availability and suggests a free one if taken.
    pub async fn suggest_code(&self, id: &str) -> Result<CodeSuggestion, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Ok(CodeSuggestion {
                exists: false,
                new_id: id.to_string(),
            });
        }

        let length = self.length_hint.code_length().await?.max(MIN_CODE_LENGTH) as usize;
        loop {
            let candidate = self.generator.generate(length)?;
            if self.repository.find_by_id(&candidate).await?.is_none() {
                return Ok(CodeSuggestion {
                    exists: true,
                    new_id: candidate,
                });
            }
        }
    }

    /// All records owned by a session token.
    pub async fn list_by_session(&self, session_token: &str) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.find_by_session(session_token).await
    }

    /// Every record, for administrative use.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_all().await
    }

    /// All records already past their expiry.
    pub async fn list_expired(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.find_expired(Utc::now()).await
    }

    /// Deletes a record owned by the given session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] both when the id does not exist and
    /// when the session token does not match; the two cases are
    /// indistinguishable to the caller.
    pub async fn delete(&self, id: &str, session_token: &str) -> Result<(), AppError> {
        let deleted = self
            .repository
            .delete_by_id_and_session(id, session_token)
            .await?;

        if !deleted {
            return Err(AppError::not_found(
                "This URL is invalid or a destination URL could not be found",
                id,
            ));
        }

        tracing::info!(id, "short url deleted");
        Ok(())
    }

    /// Deletes every expired record and returns the purged ids.
    pub async fn purge_expired(&self) -> Result<Vec<String>, AppError> {
        let purged = self.repository.delete_expired(Utc::now()).await?;
        if !purged.is_empty() {
            tracing::info!(count = purged.len(), "purged expired short urls");
        }
        Ok(purged)
    }
}
