//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter and liveness snapshot.
///
/// `owner_id` is an opaque reference into the external account directory;
/// `None` marks an anonymously created link. `clicks_count` is mutated only
/// through the store's atomic increment, never by rewriting the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub title: String,
    pub owner_id: Option<i64>,
    pub clicks_count: i64,
    pub is_alive: Option<bool>,
    pub last_check_status: Option<i32>,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if the link belongs to the given owner scope.
    ///
    /// A `None` scope means "no owner filter" and matches everything.
    pub fn visible_to(&self, owner_id: Option<i64>) -> bool {
        match owner_id {
            Some(owner) => self.owner_id == Some(owner),
            None => true,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
    pub title: String,
    pub owner_id: Option<i64>,
}

/// Result of a liveness probe, as persisted on the link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivenessSnapshot {
    pub is_alive: bool,
    pub status: Option<i32>,
    pub checked_at: DateTime<Utc>,
}
