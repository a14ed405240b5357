//! Pluggable click recording strategy.

use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::click_event::ClickEvent;

/// Strategy for handing a click event off the redirect hot path.
///
/// `record` must not block or fail the caller: the redirect response is
/// returned regardless of what happens to the event. The production
/// implementation is [`QueuedClickRecorder`]; tests substitute capturing
/// fakes.
pub trait ClickRecorder: Send + Sync {
    /// Accepts a click event for eventual durable recording.
    fn record(&self, event: ClickEvent);

    /// Reports whether the recording pipeline can still accept events.
    fn is_healthy(&self) -> bool {
        true
    }
}

/// Fire-and-forget recorder backed by a bounded mpsc channel.
///
/// A full queue or a dead worker drops the event with a warning; the
/// redirect is never delayed or failed by analytics.
pub struct QueuedClickRecorder {
    tx: mpsc::Sender<ClickEvent>,
}

impl QueuedClickRecorder {
    pub fn new(tx: mpsc::Sender<ClickEvent>) -> Self {
        Self { tx }
    }
}

impl ClickRecorder for QueuedClickRecorder {
    fn record(&self, event: ClickEvent) {
        if let Err(e) = self.tx.try_send(event) {
            warn!(error = %e, "failed to enqueue click event");
        }
    }

    fn is_healthy(&self) -> bool {
        !self.tx.is_closed()
    }
}
