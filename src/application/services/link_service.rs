//! Link lifecycle: creation, listing, liveness checks.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{Link, LivenessSnapshot, NewLink};
use crate::domain::prober::LivenessProber;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CachedLink, LinkCache};
use crate::utils::code_generator::generate_code;

/// Attempts before giving up on finding a free short code.
const MAX_CODE_ATTEMPTS: u32 = 5;

/// Manages the link lifecycle outside the redirect hot path.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn LinkCache>,
    prober: Arc<dyn LivenessProber>,
}

impl LinkService {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn LinkCache>,
        prober: Arc<dyn LivenessProber>,
    ) -> Self {
        Self {
            links,
            cache,
            prober,
        }
    }

    /// Creates a link under a freshly generated short code.
    ///
    /// Uniqueness is enforced by the store's unique constraint; on a
    /// collision a new code is drawn, up to [`MAX_CODE_ATTEMPTS`] times.
    /// The cache is warmed with the new mapping so the first redirect
    /// does not pay a store round trip.
    pub async fn shorten(
        &self,
        original_url: String,
        title: Option<String>,
        owner_id: Option<i64>,
    ) -> Result<Link, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_code();
            let new_link = NewLink {
                short_code: code.clone(),
                original_url: original_url.clone(),
                title: title.clone().unwrap_or_default(),
                owner_id,
            };

            match self.links.create(new_link).await {
                Ok(link) => {
                    info!(short_code = %link.short_code, link_id = link.id, "created link");

                    let entry = CachedLink {
                        id: link.id,
                        original_url: link.original_url.clone(),
                    };
                    if let Err(e) = self.cache.set(&link.short_code, &entry, None).await {
                        warn!(short_code = %link.short_code, error = %e, "failed to warm link cache");
                    }

                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    warn!(short_code = %code, attempt, "short code collision, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Could not allocate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Lists links, optionally restricted to one owner.
    pub async fn list(&self, owner_id: Option<i64>) -> Result<Vec<Link>, AppError> {
        self.links.list_by_owner(owner_id).await
    }

    /// Probes a link's destination and persists the outcome.
    ///
    /// A transport-level failure is recorded as dead with no status code.
    pub async fn check_alive(
        &self,
        link_id: i64,
        owner_id: Option<i64>,
    ) -> Result<(Link, LivenessSnapshot), AppError> {
        let link = self.find_visible(link_id, owner_id).await?;

        let outcome = self.prober.probe(&link.original_url).await;
        let snapshot = LivenessSnapshot {
            is_alive: outcome.is_alive,
            status: outcome.status.map(i32::from),
            checked_at: Utc::now(),
        };

        self.links.update_liveness(link.id, snapshot.clone()).await?;

        info!(
            link_id = link.id,
            is_alive = snapshot.is_alive,
            status = ?snapshot.status,
            "liveness check completed"
        );

        Ok((link, snapshot))
    }

    /// Verifies store connectivity for the health endpoint.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.links.ping().await
    }

    /// Fetches a link, hiding it from non-owners.
    pub async fn find_visible(
        &self,
        link_id: i64,
        owner_id: Option<i64>,
    ) -> Result<Link, AppError> {
        let link = self
            .links
            .find_by_id(link_id)
            .await?
            .filter(|link| link.visible_to(owner_id))
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": link_id })))?;

        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prober::{MockLivenessProber, ProbeOutcome};
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::cache::MockLinkCache;

    fn link_from(new_link: &NewLink, id: i64) -> Link {
        Link {
            id,
            short_code: new_link.short_code.clone(),
            original_url: new_link.original_url.clone(),
            title: new_link.title.clone(),
            owner_id: new_link.owner_id,
            clicks_count: 0,
            is_alive: None,
            last_check_status: None,
            last_checked_at: None,
            created_at: Utc::now(),
        }
    }

    fn noop_prober() -> MockLivenessProber {
        MockLivenessProber::new()
    }

    #[tokio::test]
    async fn test_shorten_creates_link_and_warms_cache() {
        let mut links = MockLinkRepository::new();
        links
            .expect_create()
            .times(1)
            .returning(|new_link| Ok(link_from(&new_link, 1)));

        let mut cache = MockLinkCache::new();
        cache
            .expect_set()
            .withf(|_, entry, _| entry.id == 1 && entry.original_url == "https://example.com")
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = LinkService::new(Arc::new(links), Arc::new(cache), Arc::new(noop_prober()));

        let link = service
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.short_code.len(), 6);
        assert!(link.short_code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(link.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut links = MockLinkRepository::new();
        let mut calls = 0;
        links.expect_create().times(2).returning(move |new_link| {
            calls += 1;
            if calls == 1 {
                Err(AppError::conflict(
                    "Duplicate entry",
                    json!({ "constraint": "links_short_code_key" }),
                ))
            } else {
                Ok(link_from(&new_link, 2))
            }
        });

        let mut cache = MockLinkCache::new();
        cache.expect_set().returning(|_, _, _| Ok(()));

        let service = LinkService::new(Arc::new(links), Arc::new(cache), Arc::new(noop_prober()));

        let link = service
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.id, 2);
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_attempts() {
        let mut links = MockLinkRepository::new();
        links.expect_create().times(5).returning(|_| {
            Err(AppError::conflict(
                "Duplicate entry",
                json!({ "constraint": "links_short_code_key" }),
            ))
        });

        let cache = MockLinkCache::new();
        let service = LinkService::new(Arc::new(links), Arc::new(cache), Arc::new(noop_prober()));

        let err = service
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_succeeds_even_if_cache_warm_fails() {
        let mut links = MockLinkRepository::new();
        links
            .expect_create()
            .returning(|new_link| Ok(link_from(&new_link, 3)));

        let mut cache = MockLinkCache::new();
        cache.expect_set().returning(|_, _, _| {
            Err(crate::infrastructure::cache::CacheError::Connection(
                "down".to_string(),
            ))
        });

        let service = LinkService::new(Arc::new(links), Arc::new(cache), Arc::new(noop_prober()));

        let link = service
            .shorten("https://example.com".to_string(), None, None)
            .await
            .unwrap();

        assert_eq!(link.id, 3);
    }

    #[tokio::test]
    async fn test_check_alive_persists_probe_outcome() {
        let target = NewLink {
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            title: String::new(),
            owner_id: None,
        };
        let stored = link_from(&target, 10);

        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
        links
            .expect_update_liveness()
            .withf(|id, snapshot| *id == 10 && snapshot.is_alive && snapshot.status == Some(200))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut prober = MockLivenessProber::new();
        prober.expect_probe().times(1).returning(|_| ProbeOutcome {
            status: Some(200),
            is_alive: true,
        });

        let cache = MockLinkCache::new();
        let service = LinkService::new(Arc::new(links), Arc::new(cache), Arc::new(prober));

        let (link, snapshot) = service.check_alive(10, None).await.unwrap();

        assert_eq!(link.id, 10);
        assert!(snapshot.is_alive);
        assert_eq!(snapshot.status, Some(200));
    }

    #[tokio::test]
    async fn test_check_alive_hides_foreign_links() {
        let target = NewLink {
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            title: String::new(),
            owner_id: Some(1),
        };
        let stored = link_from(&target, 11);

        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        links.expect_update_liveness().times(0);

        let cache = MockLinkCache::new();
        let service = LinkService::new(Arc::new(links), Arc::new(cache), Arc::new(noop_prober()));

        let err = service.check_alive(11, Some(2)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_forwards_owner_filter() {
        let mut links = MockLinkRepository::new();
        links
            .expect_list_by_owner()
            .withf(|owner| *owner == Some(5))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let cache = MockLinkCache::new();
        let service = LinkService::new(Arc::new(links), Arc::new(cache), Arc::new(noop_prober()));

        let result = service.list(Some(5)).await.unwrap();
        assert!(result.is_empty());
    }
}
