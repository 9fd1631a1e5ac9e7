//! Handler for short code resolution.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::ResultBody;
use crate::api::dto::resolve::ResolveParams;
use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code to its record.
///
/// # Endpoint
///
/// `GET /api/urls/{id}?password=`
///
/// Expired records resolve like unknown ones.
///
/// # Errors
///
/// - 404 if the id is unknown or expired (body carries the offending id)
/// - 403 if the record is password-protected and the password is wrong or
///   missing
pub async fn resolve_handler(
    Path(id): Path<String>,
    Query(params): Query<ResolveParams>,
    State(state): State<AppState>,
) -> Result<Json<ResultBody<UrlRecord>>, AppError> {
    let record = state
        .url_service
        .resolve(&id, params.password.as_deref())
        .await?;

    Ok(Json(ResultBody { result: record }))
}
