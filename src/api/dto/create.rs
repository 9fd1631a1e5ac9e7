//! Query parameters for short URL creation.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateParams {
    /// The destination URL to shorten.
    pub url: Option<String>,
    /// Lifetime in seconds; absent or non-positive means the link never
    /// expires.
    pub self_destruct: Option<i64>,
    /// Opaque session correlator; required so the link can be managed later.
    pub session_token: Option<String>,
    /// Optional password protecting the link.
    pub password: Option<String>,
}
