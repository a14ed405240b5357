//! DTOs for link listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Query parameters for the link list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    /// Restrict the listing to one owner's links.
    pub owner_id: Option<i64>,
}

/// One link in a listing.
#[derive(Debug, Serialize)]
pub struct LinkSummary {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub title: String,
    pub owner_id: Option<i64>,
    pub clicks_count: i64,
    pub is_alive: Option<bool>,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkSummary {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_url: format!("/r/{}", link.short_code),
            short_code: link.short_code,
            original_url: link.original_url,
            title: link.title,
            owner_id: link.owner_id,
            clicks_count: link.clicks_count,
            is_alive: link.is_alive,
            last_checked_at: link.last_checked_at,
            created_at: link.created_at,
        }
    }
}

/// Response wrapper for the link list endpoint.
#[derive(Debug, Serialize)]
pub struct ListLinksResponse {
    pub links: Vec<LinkSummary>,
}
