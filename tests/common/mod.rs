//! Common test utilities for fast-healthchecks
//!
//! Provides checks with controllable latency and outcome.

pub mod fixtures;

pub use fixtures::{FixedCheck, failing, passing};
