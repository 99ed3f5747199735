//! Test support utilities for the dare-rounds engine.
//!
//! Provides unified logging initialization for unit and integration tests,
//! plus helpers for generating unique test identifiers.

pub mod logging;
pub mod unique_helpers;
