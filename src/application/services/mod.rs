//! Application services orchestrating domain logic.
//!
//! # Services
//!
//! - [`RedirectService`] - Hot-path resolution with cache and click recording
//! - [`LinkService`] - Creation, listing, liveness checks
//! - [`StatsService`] - Click aggregation

pub mod link_service;
pub mod redirect_service;
pub mod stats_service;

pub use link_service::LinkService;
pub use redirect_service::{RedirectService, RequestMeta};
pub use stats_service::{LinkStats, StatsService};
