//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::domain::recorder::ClickRecorder;
use crate::infrastructure::cache::LinkCache;

/// Application state shared across all request handlers.
///
/// Services are built once at startup over trait objects, so tests can
/// assemble the same state from in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    pub cache: Arc<dyn LinkCache>,
    pub recorder: Arc<dyn ClickRecorder>,
}

impl AppState {
    pub fn new(
        redirect_service: Arc<RedirectService>,
        link_service: Arc<LinkService>,
        stats_service: Arc<StatsService>,
        cache: Arc<dyn LinkCache>,
        recorder: Arc<dyn ClickRecorder>,
    ) -> Self {
        Self {
            redirect_service,
            link_service,
            stats_service,
            cache,
            recorder,
        }
    }
}
