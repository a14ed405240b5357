//! Outbound HTTP liveness prober.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use ureq::Agent;

use crate::domain::prober::{LivenessProber, ProbeOutcome};

/// Prober issuing HEAD requests with a bounded timeout.
///
/// ureq is synchronous, so the request runs on the blocking thread pool;
/// the check endpoint is management traffic and never shares the redirect
/// hot path.
pub struct HttpProber {
    timeout: Duration,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn probe_sync(url: &str, timeout: Duration) -> ProbeOutcome {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        match agent.head(url).call() {
            Ok(response) => {
                let status = response.status().as_u16();
                ProbeOutcome {
                    status: Some(status),
                    is_alive: (200..400).contains(&status),
                }
            }
            Err(ureq::Error::StatusCode(status)) => ProbeOutcome {
                status: Some(status),
                is_alive: false,
            },
            Err(e) => {
                debug!(url, error = %e, "liveness probe failed at transport level");
                ProbeOutcome {
                    status: None,
                    is_alive: false,
                }
            }
        }
    }
}

#[async_trait]
impl LivenessProber for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        let url = url.to_string();
        let timeout = self.timeout;

        tokio::task::spawn_blocking(move || Self::probe_sync(&url, timeout))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "liveness probe task failed");
                ProbeOutcome {
                    status: None,
                    is_alive: false,
                }
            })
    }
}
