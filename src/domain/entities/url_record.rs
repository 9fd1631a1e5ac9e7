//! The persisted short URL record.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A short URL record.
///
/// Created once, never mutated; removed either by an owner-authorized delete
/// or by the expiration sweep. Wire field names follow the public JSON
/// contract (`date_created`, `url`, `self_destruct`); the password hash never
/// leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct UrlRecord {
    /// Short code; primary key, drawn from the code alphabet.
    pub id: String,
    /// The long target URL.
    pub destination: String,
    #[serde(rename = "date_created")]
    pub created_at: DateTime<Utc>,
    /// Fully-qualified short link, `base_url + "/" + id`; derived at creation
    /// and stored, not recomputed.
    #[serde(rename = "url")]
    pub short_url: String,
    /// `None` means the record never expires.
    #[serde(rename = "self_destruct")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Opaque correlator for ownership checks on delete and list.
    pub session_token: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
}

impl UrlRecord {
    /// True iff the record has an expiry strictly before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    /// True iff the record is password-protected.
    pub fn is_protected(&self) -> bool {
        self.password_hash.is_some()
    }
}
