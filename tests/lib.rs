//! Test suite for fast-healthchecks
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Shared check fixtures with controllable latency and outcome.
//!
//! ### 2. Integration Tests (`integration/`)
//! Tests that drive the public API end to end:
//! - Probe execution and response construction
//! - actix-web route binding
//! - HTTP check against a mock server
//! - Configuration files
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test --all-features
//!
//! # Run only integration tests
//! cargo test --test lib --all-features
//! ```

mod common;
mod integration;
