//! Crate-level test suites.
//!
//! - `determinism.rs`: same seed and choices give the same match
//! - `integration.rs`: whole matches through the public API
//! - `helpers.rs`: settings and scripted-ball factories shared by unit tests

mod helpers;

// Re-export for convenience
pub use helpers::*;
