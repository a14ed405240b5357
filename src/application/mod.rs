//! Application layer: use-case orchestration over the domain contracts.

pub mod services;
