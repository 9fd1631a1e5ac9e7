//! Length-hint collaborator.
//!
//! An external service recommends the current short-code length via
//! `GET <endpoint>` returning `{"result": <integer>}`. The resolver floors
//! the value; providers report it raw. A hint failure fails the whole create
//! request as [`AppError::Upstream`] — it is never a process fault and never
//! silently defaults.

use crate::error::AppError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Source of the recommended short-code length.
#[async_trait]
pub trait LengthHint: Send + Sync {
    /// Returns the recommended code length.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the hint is unreachable or the
    /// payload is malformed.
    async fn code_length(&self) -> Result<i64, AppError>;
}

#[derive(Deserialize)]
struct LengthHintResponse {
    result: i64,
}

/// HTTP implementation of [`LengthHint`].
pub struct HttpLengthHint {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLengthHint {
    /// Builds a client for the given hint endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the HTTP client cannot be built.
    pub fn new(endpoint: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AppError::internal("Failed to build length-hint client", e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl LengthHint for HttpLengthHint {
    async fn code_length(&self) -> Result<i64, AppError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| AppError::upstream("Length-hint service unreachable", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(
                "Length-hint service returned an error",
                format!("status {status}"),
            ));
        }

        let body: LengthHintResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream("Malformed length-hint payload", e.to_string()))?;

        Ok(body.result)
    }
}

/// Fixed-length [`LengthHint`], used when no hint endpoint is configured and
/// as a test double.
pub struct StaticLengthHint {
    length: i64,
}

impl StaticLengthHint {
    pub fn new(length: i64) -> Self {
        Self { length }
    }
}

#[async_trait]
impl LengthHint for StaticLengthHint {
    async fn code_length(&self) -> Result<i64, AppError> {
        Ok(self.length)
    }
}
