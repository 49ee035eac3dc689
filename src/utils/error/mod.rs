//! Error handling for the healthcheck engine
//!
//! This module defines the error types surfaced to callers of the probe
//! endpoints and the standalone server. Check failures never appear here:
//! they are folded into the report as unhealthy results.

mod response;
mod types;

pub use types::{HealthcheckError, Result};
