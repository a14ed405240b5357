//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation
//! - [`device_classifier`] - User-agent classification
//! - [`truncate`] - Bounded string truncation for stored click metadata

pub mod code_generator;
pub mod device_classifier;
pub mod truncate;
