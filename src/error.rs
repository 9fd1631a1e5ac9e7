//! Application error taxonomy and HTTP error responses.
//!
//! Every failure surfaces as an [`AppError`]; no layer logs an error and
//! continues with a default value. The HTTP body shape is
//! `{"error": {"message", "error", "errorCode", "id"?}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::random::RandomError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    message: String,
    error: String,
    #[serde(rename = "errorCode")]
    error_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or disallowed input (bad destination URL, missing field).
    #[error("{message}")]
    Validation { message: String, detail: String },

    /// No matching record; distinguishable from store failure.
    #[error("{message}")]
    NotFound { message: String, id: String },

    /// Duplicate short code; the uniqueness resolver's collision signal.
    #[error("{message}")]
    Conflict { message: String },

    /// Store-level failure (connection, query, decode).
    #[error("{message}: {source}")]
    Store {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// Length-hint service unreachable or returned a malformed payload.
    #[error("{message}: {detail}")]
    Upstream { message: String, detail: String },

    #[error("{message}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            id: id.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict("Short code already exists");
        }

        AppError::Store {
            message: "Database error".to_string(),
            source: e,
        }
    }
}

impl From<RandomError> for AppError {
    fn from(e: RandomError) -> Self {
        AppError::internal("Randomness source failure", e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error, id) = match self {
            AppError::Validation { message, detail } => {
                (StatusCode::FORBIDDEN, message, detail, None)
            }
            AppError::NotFound { message, id } => {
                (StatusCode::NOT_FOUND, message, "no rows found".to_string(), Some(id))
            }
            AppError::Conflict { message } => {
                (StatusCode::CONFLICT, message.clone(), message, None)
            }
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, message, source.to_string(), None)
            }
            AppError::Upstream { message, detail } => {
                tracing::error!(detail = %detail, "upstream failure");
                (StatusCode::BAD_GATEWAY, message, detail, None)
            }
            AppError::Internal { message, detail } => {
                tracing::error!(detail = %detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message, detail, None)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                message,
                error,
                error_code: status.as_u16(),
                id,
            },
        };

        (status, Json(body)).into_response()
    }
}
