//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::application::services::RequestMeta;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Request Flow
///
/// 1. Check cache for the code
/// 2. On cache miss or cache error, query the store
/// 3. Repopulate the cache
/// 4. Send the click to the background recorder (fire-and-forget)
/// 5. Return 302 Found with the destination in `Location`
///
/// A full click queue or a failing cache never delays or fails the
/// redirect; the click is simply dropped.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let meta = RequestMeta {
        referrer: header_value(&headers, header::REFERER),
        user_agent: header_value(&headers, header::USER_AGENT),
        ip: Some(addr.ip().to_string()),
    };

    let url = state.redirect_service.resolve(&code, meta).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
