//! Link cache trait and error types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),
    #[error("cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cached resolution of a short code.
///
/// Exactly the pair the redirect path needs: the link id for click
/// recording and the destination URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedLink {
    pub id: i64,
    pub original_url: String,
}

/// Trait for caching short code resolutions.
///
/// Implementations must be safe under concurrent access from simultaneous
/// redirect requests and must fail open: a backend error on `get` is a
/// miss, an error on `set` is swallowed after logging, and neither ever
/// disrupts the redirect. Two racing misses may both write the same key;
/// last write wins with equivalent data, which is benign.
///
/// Entries expire after a fixed TTL; no invalidation happens when a link
/// is edited (staleness bounded by the TTL is an accepted trade-off).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - shared Redis tier
/// - [`crate::infrastructure::cache::MemoryCache`] - process-local moka cache
/// - [`crate::infrastructure::cache::NullCache`] - caching disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkCache: Send + Sync {
    /// Returns the cached entry if present and not expired.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(entry))` on cache hit
    /// - `Ok(None)` on miss or expired entry
    ///
    /// # Errors
    ///
    /// Backend failures may be surfaced as [`CacheError`]; callers treat
    /// them as misses and fall back to the durable store.
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedLink>>;

    /// Stores an entry, replacing any prior value for the code.
    ///
    /// `ttl_seconds = None` applies the implementation's default TTL.
    ///
    /// # Errors
    ///
    /// Implementations log backend errors and return `Ok(())` so cache
    /// population never fails the request that triggered it.
    async fn set(
        &self,
        short_code: &str,
        entry: &CachedLink,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Removes a cached entry.
    ///
    /// Not called on the redirect path; exists for management surfaces.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, short_code: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
