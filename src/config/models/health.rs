//! Probe response configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::probe::{ProbeOptions, report_handler};
use crate::utils::error::{HealthcheckError, Result};

/// How probe outcomes are turned into HTTP responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Route prefix the probes are mounted under
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Status returned when a probe is healthy
    #[serde(default = "default_success_status")]
    pub success_status: u16,
    /// Status returned when a probe is unhealthy
    #[serde(default = "default_failure_status")]
    pub failure_status: u16,
    /// Include `allow_partial_failure` and `error_details` in payloads
    #[serde(default)]
    pub debug: bool,
    /// Report probes healthy even when some checks fail
    #[serde(default)]
    pub allow_partial_failure: bool,
    /// Respond with the serialized report instead of `null`
    #[serde(default)]
    pub report_body: bool,
    /// Outer deadline per check in seconds
    #[serde(default)]
    pub deadline: Option<f64>,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            success_status: default_success_status(),
            failure_status: default_failure_status(),
            debug: false,
            allow_partial_failure: false,
            report_body: false,
            deadline: None,
        }
    }
}

impl HealthConfig {
    /// Probe options described by this configuration
    ///
    /// Fails on a deadline that is not a positive number of seconds.
    pub fn probe_options(&self) -> Result<ProbeOptions> {
        let mut options = ProbeOptions::new()
            .success_status(self.success_status)
            .failure_status(self.failure_status)
            .debug(self.debug)
            .allow_partial_failure(self.allow_partial_failure);

        if self.report_body {
            options = options
                .success_handler(report_handler())
                .failure_handler(report_handler());
        }

        if let Some(seconds) = self.deadline {
            let deadline = Duration::try_from_secs_f64(seconds)
                .ok()
                .filter(|deadline| !deadline.is_zero())
                .ok_or_else(|| {
                    HealthcheckError::config(format!("Invalid deadline: {} seconds", seconds))
                })?;
            options = options.deadline(deadline);
        }

        Ok(options)
    }
}
