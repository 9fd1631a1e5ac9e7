//! Handler for short URL creation.

use axum::{Json, extract::Query, extract::State};

use crate::api::dto::ResultBody;
use crate::api::dto::create::CreateParams;
use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/create-short-url?url=&self_destruct=&session_token=&password=`
///
/// # Errors
///
/// - 403 for a missing/malformed destination or missing session token
/// - 502 if the length-hint service fails
/// - 500 on store failure
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
) -> Result<Json<ResultBody<UrlRecord>>, AppError> {
    let url = params.url.unwrap_or_default();
    if url.is_empty() {
        return Err(AppError::validation(
            "A URL was not provided or the input was incorrect",
            "missing url parameter",
        ));
    }

    let session_token = params.session_token.unwrap_or_default();
    if session_token.is_empty() {
        return Err(AppError::validation(
            "A session token is required",
            "missing session_token parameter",
        ));
    }

    let record = state
        .url_service
        .create_short_url(
            &url,
            params.self_destruct.unwrap_or(0),
            &session_token,
            params.password.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(Json(ResultBody { result: record }))
}
