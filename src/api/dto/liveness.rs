//! DTOs for the destination liveness check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::LivenessSnapshot;

/// Query parameters for the check endpoint.
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    pub owner_id: Option<i64>,
}

/// Outcome of a liveness probe.
///
/// `status` is absent when the destination never answered with an HTTP
/// status (DNS failure, connect timeout).
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub is_alive: bool,
    pub status: Option<i32>,
    pub checked_at: DateTime<Utc>,
}

impl From<LivenessSnapshot> for CheckResponse {
    fn from(snapshot: LivenessSnapshot) -> Self {
        Self {
            is_alive: snapshot.is_alive,
            status: snapshot.status,
            checked_at: snapshot.checked_at,
        }
    }
}
