//! Handler for the short code availability probe.

use axum::{Json, extract::Query, extract::State};

use crate::api::dto::availability::{AvailabilityParams, AvailabilityResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Probes whether a short code is taken and suggests a free one.
///
/// # Endpoint
///
/// `GET /api/new-short-id?id=`
pub async fn new_short_id_handler(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let id = params.id.unwrap_or_default();
    if id.is_empty() {
        return Err(AppError::validation(
            "A short code id is required",
            "missing id parameter",
        ));
    }

    let suggestion = state.url_service.suggest_code(&id).await?;

    Ok(Json(AvailabilityResponse {
        id,
        new_id: suggestion.new_id,
        exists: suggestion.exists,
    }))
}
