//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::stats::{StatsQuery, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregated click statistics for one link.
///
/// # Endpoint
///
/// `GET /api/links/{id}/stats?owner_id={owner}`
///
/// `clicks_total` comes from the link's atomic counter; `by_day` buckets
/// recorded click events by UTC calendar day, ascending. The total may
/// exceed the sum of the buckets when detail rows were dropped under load.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown id or a link outside the owner
/// scope.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(link_id): Path<i64>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let (_, stats) = state
        .stats_service
        .aggregate(link_id, query.owner_id)
        .await?;

    Ok(Json(stats.into()))
}
