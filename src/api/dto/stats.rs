//! DTOs for link statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::services::LinkStats;
use crate::domain::entities::DayCount;

/// Query parameters for the stats endpoint.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    /// Owner scope; a link outside the scope reads as not found.
    pub owner_id: Option<i64>,
}

/// One calendar day of clicks (UTC day boundaries).
#[derive(Debug, Serialize)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub count: i64,
}

impl From<DayCount> for DayBucket {
    fn from(d: DayCount) -> Self {
        Self {
            day: d.day,
            count: d.count,
        }
    }
}

/// Aggregated statistics for a single link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub clicks_total: i64,
    pub by_day: Vec<DayBucket>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            clicks_total: stats.clicks_total,
            by_day: stats.by_day.into_iter().map(Into::into).collect(),
        }
    }
}
