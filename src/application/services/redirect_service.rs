//! Redirect resolution: the hot path.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::recorder::ClickRecorder;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CachedLink, LinkCache};

/// Request metadata captured for click recording.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

/// Resolves short codes to destination URLs.
///
/// Consults the cache first, falls back to the durable store on a miss or
/// a cache error, repopulates the cache at the standard TTL, and hands
/// the click to the recorder. Cache and recording problems never fail the
/// redirect; only an unknown code or a genuine store error does.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn LinkCache>,
    recorder: Arc<dyn ClickRecorder>,
}

impl RedirectService {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn LinkCache>,
        recorder: Arc<dyn ClickRecorder>,
    ) -> Self {
        Self {
            links,
            cache,
            recorder,
        }
    }

    /// Resolves a short code and records the click.
    ///
    /// Returns the destination URL exactly as stored; no normalization and
    /// no revalidation against the live destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code exists in neither the
    /// cache nor the store, [`AppError::Internal`] when the store fetch
    /// itself fails.
    pub async fn resolve(&self, short_code: &str, meta: RequestMeta) -> Result<String, AppError> {
        let cached = match self.cache.get(short_code).await {
            Ok(cached) => cached,
            Err(e) => {
                // Cache backend failure: fall through to the store.
                warn!(short_code, error = %e, "cache unavailable, falling back to store");
                None
            }
        };

        let entry = match cached {
            Some(entry) => entry,
            None => {
                let link = self
                    .links
                    .find_by_code(short_code)
                    .await?
                    .ok_or_else(|| {
                        AppError::not_found("Unknown short code", json!({ "code": short_code }))
                    })?;

                let entry = CachedLink {
                    id: link.id,
                    original_url: link.original_url,
                };

                if let Err(e) = self.cache.set(short_code, &entry, None).await {
                    warn!(short_code, error = %e, "failed to populate link cache");
                }

                entry
            }
        };

        debug!(short_code, link_id = entry.id, "resolved redirect");

        self.recorder.record(ClickEvent::new(
            entry.id,
            meta.referrer,
            meta.user_agent,
            meta.ip,
        ));

        Ok(entry.original_url)
    }
}
