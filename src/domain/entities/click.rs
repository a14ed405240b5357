//! Click entity representing a single redirect event.

use chrono::{DateTime, NaiveDate, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Immutable once written. `occurred_at` reflects the event's own
/// processing time; under concurrency the row order is not guaranteed to
/// match wall-clock request order.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub occurred_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub device_type: String,
    pub os: String,
    pub browser: String,
    pub ip: Option<String>,
}

/// Input data for recording a new click event.
///
/// Referrer and user agent are expected to be truncated to the storage
/// bound before this struct is built; the timestamp is set by the database.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub device_type: String,
    pub os: String,
    pub browser: String,
    pub ip: Option<String>,
}

/// One calendar-day bucket of the per-link click aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount {
    pub day: NaiveDate,
    pub count: i64,
}
