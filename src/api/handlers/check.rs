//! Handler for the destination liveness check.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::liveness::{CheckQuery, CheckResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Probes a link's destination and persists the outcome.
///
/// # Endpoint
///
/// `POST /api/links/{id}/check?owner_id={owner}`
///
/// Issues a HEAD request against the destination with a bounded timeout.
/// 2xx and 3xx responses count as alive; a transport-level failure is
/// recorded as dead with no status code.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id or a link outside the owner
/// scope.
pub async fn check_handler(
    State(state): State<AppState>,
    Path(link_id): Path<i64>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<CheckResponse>, AppError> {
    let (_, snapshot) = state
        .link_service
        .check_alive(link_id, query.owner_id)
        .await?;

    Ok(Json(snapshot.into()))
}
