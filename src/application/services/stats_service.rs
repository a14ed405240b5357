//! Per-link click statistics.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{DayCount, Link};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Aggregated statistics for one link.
///
/// `clicks_total` comes from the link's atomic counter, `by_day` from the
/// recorded click events. The two can disagree by the clicks whose detail
/// rows were dropped or are still queued; the counter is authoritative for
/// the total.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStats {
    pub clicks_total: i64,
    pub by_day: Vec<DayCount>,
}

/// Read-side aggregation over the click history.
pub struct StatsService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl StatsService {
    pub fn new(links: Arc<dyn LinkRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// Builds the stats for a link, hiding it from non-owners.
    pub async fn aggregate(
        &self,
        link_id: i64,
        owner_id: Option<i64>,
    ) -> Result<(Link, LinkStats), AppError> {
        let link = self
            .links
            .find_by_id(link_id)
            .await?
            .filter(|link| link.visible_to(owner_id))
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": link_id })))?;

        let by_day = self.clicks.clicks_by_day(link.id).await?;

        let stats = LinkStats {
            clicks_total: link.clicks_count,
            by_day,
        };

        Ok((link, stats))
    }
}
