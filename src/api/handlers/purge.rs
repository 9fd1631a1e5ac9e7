//! Handler for the expiration sweep.

use axum::{Json, extract::State};

use crate::api::dto::ResultBody;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes every record past its expiry and returns the purged ids.
///
/// # Endpoint
///
/// `DELETE /api/delete-expired-ids`
pub async fn purge_expired_handler(
    State(state): State<AppState>,
) -> Result<Json<ResultBody<Vec<String>>>, AppError> {
    let purged = state.url_service.purge_expired().await?;
    Ok(Json(ResultBody { result: purged }))
}
