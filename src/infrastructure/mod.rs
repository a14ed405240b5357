//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain contracts:
//!
//! - [`cache`] - Link cache (Redis, in-memory, no-op)
//! - [`persistence`] - PostgreSQL repositories
//! - [`probe`] - Outbound HTTP liveness prober

pub mod cache;
pub mod persistence;
pub mod probe;
