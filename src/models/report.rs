//! Aggregated probe report

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::result::HealthCheckResult;

/// Report of all checks run by a probe
///
/// The overall verdict is derived from `results` on every call to
/// [`HealthcheckReport::healthy`] and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthcheckReport {
    /// Per-check results, in check order
    pub results: Vec<HealthCheckResult>,
    /// Treat the report as healthy even when some checks failed
    #[serde(default)]
    pub allow_partial_failure: bool,
}

impl HealthcheckReport {
    /// Create a report that requires every check to pass
    pub fn new(results: Vec<HealthCheckResult>) -> Self {
        Self {
            results,
            allow_partial_failure: false,
        }
    }

    /// Set whether failed checks still yield a healthy report
    pub fn with_partial_failure(mut self, allow_partial_failure: bool) -> Self {
        self.allow_partial_failure = allow_partial_failure;
        self
    }

    /// Whether the probe is healthy
    ///
    /// An empty report is healthy.
    pub fn healthy(&self) -> bool {
        self.results.iter().all(|result| result.healthy) || self.allow_partial_failure
    }

    /// Results of the checks that failed
    pub fn failures(&self) -> impl Iterator<Item = &HealthCheckResult> {
        self.results.iter().filter(|result| !result.healthy)
    }

    /// Serialize into the payload handed to content handlers
    ///
    /// Without `debug`, `allow_partial_failure` and every `error_details`
    /// key are left out.
    pub fn to_data(&self, debug: bool) -> Map<String, Value> {
        let results = self
            .results
            .iter()
            .map(|result| result.to_value(debug))
            .collect();

        let mut data = Map::with_capacity(2);
        data.insert("results".to_string(), Value::Array(results));
        if debug {
            data.insert(
                "allow_partial_failure".to_string(),
                Value::Bool(self.allow_partial_failure),
            );
        }
        data
    }
}

impl fmt::Display for HealthcheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", result)?;
        }
        Ok(())
    }
}
