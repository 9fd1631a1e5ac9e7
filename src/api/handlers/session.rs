//! Handler for listing a session's records.

use axum::{Json, extract::Query, extract::State};

use crate::api::dto::ResultBody;
use crate::api::dto::session::SessionParams;
use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every record created under a session token, newest first.
///
/// # Endpoint
///
/// `GET /api/session-urls?session_token=`
pub async fn session_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<SessionParams>,
) -> Result<Json<ResultBody<Vec<UrlRecord>>>, AppError> {
    let session_token = params.session_token.unwrap_or_default();
    if session_token.is_empty() {
        return Err(AppError::validation(
            "A session token is required",
            "missing session_token parameter",
        ));
    }

    let records = state.url_service.list_by_session(&session_token).await?;
    Ok(Json(ResultBody { result: records }))
}
