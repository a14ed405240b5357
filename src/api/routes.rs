//! API route configuration.

use crate::api::handlers::{check_handler, list_links_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Management API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a shortened link
/// - `GET  /links`              - List links (optional owner filter)
/// - `GET  /links/{id}/stats`   - Per-link click statistics
/// - `POST /links/{id}/check`   - Probe the destination's liveness
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{id}/stats", get(stats_handler))
        .route("/links/{id}/check", post(check_handler))
}
