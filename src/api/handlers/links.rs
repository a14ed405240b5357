//! Handler for link listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::links::{ListLinksQuery, ListLinksResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists links, optionally filtered by owner.
///
/// # Endpoint
///
/// `GET /api/links?owner_id={id}`
///
/// Results are ordered newest first.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<ListLinksResponse>, AppError> {
    let links = state.link_service.list(query.owner_id).await?;

    Ok(Json(ListLinksResponse {
        links: links.into_iter().map(Into::into).collect(),
    }))
}
