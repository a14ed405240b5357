//! HTTP request handlers.
//!
//! Each handler translates a request into a service call and formats the
//! result. The redirect handler is the only one on the hot path.

pub mod check;
pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use check::check_handler;
pub use health::health_handler;
pub use links::list_links_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
