//! Query parameters for short code resolution.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    /// Password for protected records.
    pub password: Option<String>,
}
