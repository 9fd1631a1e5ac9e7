//! Handler for owner-authorized deletion.

use axum::{Json, extract::Query, extract::State};

use crate::api::dto::ResultBody;
use crate::api::dto::delete::DeleteParams;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a record owned by the calling session.
///
/// # Endpoint
///
/// `DELETE /api/delete-id?id=&session_token=`
///
/// # Errors
///
/// Returns 404 when the id does not exist, and the identical 404 when the
/// session token does not match — ownership of an id is never revealed.
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<ResultBody<bool>>, AppError> {
    let id = params.id.unwrap_or_default();
    if id.is_empty() {
        return Err(AppError::validation(
            "A short code id is required",
            "missing id parameter",
        ));
    }

    let session_token = params.session_token.unwrap_or_default();

    state.url_service.delete(&id, &session_token).await?;

    Ok(Json(ResultBody { result: true }))
}
