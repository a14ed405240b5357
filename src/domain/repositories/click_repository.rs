//! Repository trait for click event storage and aggregation.

use crate::domain::entities::{Click, DayCount, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for durable click events.
///
/// Appends one row per successful redirect and serves the day-bucketed
/// aggregation for the stats surface.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Persists a new click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors (including a
    /// dangling `link_id`; the caller logs and drops the event).
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Groups a link's click events by UTC calendar day, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn clicks_by_day(&self, link_id: i64) -> Result<Vec<DayCount>, AppError>;
}
