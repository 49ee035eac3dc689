//! Integration tests for fast-healthchecks
//!
//! These tests verify the interaction between the probe engine, the
//! response builder, the actix binding and the configuration layer.

pub mod config_file_tests;
pub mod probe_flow_tests;
pub mod router_tests;
#[cfg(feature = "http")]
pub mod url_check_tests;
