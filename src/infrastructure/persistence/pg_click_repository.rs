//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, DayCount, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    occurred_at: DateTime<Utc>,
    referrer: Option<String>,
    user_agent: Option<String>,
    device_type: String,
    os: String,
    browser: String,
    ip: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click {
            id: row.id,
            link_id: row.link_id,
            occurred_at: row.occurred_at,
            referrer: row.referrer,
            user_agent: row.user_agent,
            device_type: row.device_type,
            os: row.os,
            browser: row.browser,
            ip: row.ip,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DayCountRow {
    day: NaiveDate,
    count: i64,
}

/// PostgreSQL repository for click events and day-bucketed aggregation.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            "INSERT INTO click_events \
                 (link_id, referrer, user_agent, device_type, os, browser, ip) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, link_id, occurred_at, referrer, user_agent, \
                       device_type, os, browser, ip",
        )
        .bind(new_click.link_id)
        .bind(&new_click.referrer)
        .bind(&new_click.user_agent)
        .bind(&new_click.device_type)
        .bind(&new_click.os)
        .bind(&new_click.browser)
        .bind(&new_click.ip)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn clicks_by_day(&self, link_id: i64) -> Result<Vec<DayCount>, AppError> {
        // Day boundaries are fixed to UTC regardless of the session timezone.
        let rows = sqlx::query_as::<_, DayCountRow>(
            "SELECT (occurred_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count \
             FROM click_events \
             WHERE link_id = $1 \
             GROUP BY day \
             ORDER BY day ASC",
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DayCount {
                day: r.day,
                count: r.count,
            })
            .collect())
    }
}
