//! CORS configuration for the public API.

use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Builds a CORS layer allowing exactly the configured site origins.
///
/// Origins that fail header-value parsing are skipped with a warning rather
/// than aborting startup.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_accepts_valid_origins() {
        let _ = layer(&[
            "https://snip.example.com".to_string(),
            "http://localhost:3000".to_string(),
        ]);
    }

    #[test]
    fn test_layer_skips_invalid_origin() {
        let _ = layer(&["bad\norigin".to_string()]);
    }
}
