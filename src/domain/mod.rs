//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event message
//! - [`recorder`] - Pluggable click recording strategy
//! - [`click_worker`] - Asynchronous click processing worker
//! - [`prober`] - Liveness probing contract
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves the short code (cache first)
//! 2. A [`click_event::ClickEvent`] is handed to the [`recorder::ClickRecorder`]
//! 3. [`click_worker::run_click_worker`] increments the counter and persists
//!    the event via [`repositories::ClickRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod prober;
pub mod recorder;
pub mod repositories;
