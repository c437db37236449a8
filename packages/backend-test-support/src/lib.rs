//! Shared helpers for the backend's integration tests: one-time logging setup
//! and unique identity generation.

pub mod logging;
pub mod unique_helpers;
