//! Destination URL validation and normalization.
//!
//! Every destination passes through here before a record is created: only
//! HTTP(S) URLs are accepted, hostnames are lowercased, and destinations
//! pointing back at the shortener itself are rejected.

use url::Url;

/// Errors that can occur while validating a destination URL.
#[derive(Debug, thiserror::Error)]
pub enum DestinationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS destinations are allowed")]
    UnsupportedProtocol,

    #[error("Destination must not point at this service")]
    SelfReferential,
}

/// Validates a destination URL and returns its normalized form.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be `http` or `https` (rejects `javascript:`, `data:`, ...)
/// 3. Hostname is lowercased
/// 4. Hostname must differ from `own_host`, the host the short links live on
///
/// # Errors
///
/// Returns [`DestinationError`] describing the first rule violated.
pub fn validate_destination(input: &str, own_host: &str) -> Result<String, DestinationError> {
    let mut url =
        Url::parse(input).map_err(|e| DestinationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(DestinationError::UnsupportedProtocol),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        if host_lowercase == own_host {
            return Err(DestinationError::SelfReferential);
        }
        url.set_host(Some(&host_lowercase))
            .map_err(|e| DestinationError::InvalidFormat(e.to_string()))?;
    }

    Ok(url.to_string())
}

/// Extracts the host component of a base site URL, for self-reference checks.
///
/// Returns an empty string when the base URL is unparseable; the check then
/// never matches, which only disables self-reference rejection.
pub fn host_of(base_url: &str) -> String {
    Url::parse(base_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
        .unwrap_or_default()
}
