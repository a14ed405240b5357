//! Liveness prober interface.

use async_trait::async_trait;

/// Outcome of one outbound HEAD probe against a destination URL.
///
/// `status` is `None` when the request failed at the transport level
/// (DNS, connect, timeout) and no HTTP status was ever received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: Option<u16>,
    pub is_alive: bool,
}

/// Probes whether a destination URL still responds.
///
/// Independent of the redirect path; only the management check endpoint
/// calls it. The production implementation is
/// [`crate::infrastructure::probe::HttpProber`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LivenessProber: Send + Sync {
    /// Issues a HEAD request against `url`. Never fails: transport errors
    /// are reported as a dead outcome with no status.
    async fn probe(&self, url: &str) -> ProbeOutcome;
}
