//! Handler for link creation.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened link under a generated code.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request
///
/// ```json
/// { "original_url": "https://example.com/page", "title": "Example" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `original_url` is not a valid URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    request.validate()?;

    let link = state
        .link_service
        .shorten(request.original_url, request.title, request.owner_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
