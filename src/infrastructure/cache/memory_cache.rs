//! Process-local in-memory cache implementation.

use super::service::{CacheResult, CachedLink, LinkCache};
use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

const MAX_ENTRIES: u64 = 100_000;

/// In-memory link cache backed by moka, with a fixed TTL.
///
/// Used when no Redis tier is configured, and in tests. The TTL is set at
/// construction time and applies uniformly; the per-call `ttl_seconds`
/// hint is ignored, which matches the fixed-window expiry policy.
pub struct MemoryCache {
    cache: Cache<String, CachedLink>,
}

impl MemoryCache {
    /// Creates a cache whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        debug!("Using in-memory link cache (TTL: {:?})", ttl);
        Self {
            cache: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(ttl)
                .build(),
        }
    }
}

#[async_trait]
impl LinkCache for MemoryCache {
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedLink>> {
        Ok(self.cache.get(short_code).await)
    }

    async fn set(
        &self,
        short_code: &str,
        entry: &CachedLink,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.cache
            .insert(short_code.to_string(), entry.clone())
            .await;
        Ok(())
    }

    async fn invalidate(&self, short_code: &str) -> CacheResult<()> {
        self.cache.invalidate(short_code).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
