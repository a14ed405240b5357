//! Background worker that turns queued click events into durable records.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::device_classifier::classify;
use crate::utils::truncate::truncate_chars;

/// Storage bound for referrer and user-agent strings.
pub const MAX_FIELD_CHARS: usize = 1000;

/// Consumes click events until the channel closes.
///
/// Each event is processed independently: the counter increment and the
/// event insert are two separate statements with no transaction between
/// them, so a crash in between leaves the counter ahead of the logged
/// events (accepted inconsistency window). Failures are logged and the
/// event is dropped; nothing here can reach the redirect path.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
) {
    while let Some(event) = rx.recv().await {
        let link_id = event.link_id;
        if let Err(e) = process_click(links.as_ref(), clicks.as_ref(), event).await {
            warn!(link_id, error = %e, "failed to record click");
        }
    }

    info!("click worker stopped");
}

/// Records one click: atomic counter increment, UA classification, field
/// truncation, durable event insert.
async fn process_click(
    links: &dyn LinkRepository,
    clicks: &dyn ClickRepository,
    event: ClickEvent,
) -> Result<(), AppError> {
    links.increment_clicks(event.link_id).await?;

    let device = classify(event.user_agent.as_deref().unwrap_or(""));

    let new_click = NewClick {
        link_id: event.link_id,
        referrer: event.referrer.map(|r| truncate_chars(r, MAX_FIELD_CHARS)),
        user_agent: event
            .user_agent
            .map(|ua| truncate_chars(ua, MAX_FIELD_CHARS)),
        device_type: device.device_type,
        os: device.os,
        browser: device.browser,
        ip: event.ip,
    };

    clicks.record(new_click).await?;

    Ok(())
}
