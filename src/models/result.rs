//! Per-check result

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Result of a single health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Name of the check
    pub name: String,
    /// Whether the check passed
    pub healthy: bool,
    /// Diagnostic text, only present when the check failed
    #[serde(default)]
    pub error_details: Option<String>,
}

impl HealthCheckResult {
    /// Create a result for a check that passed
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            healthy: true,
            error_details: None,
        }
    }

    /// Create a result for a check that failed with the given diagnostic
    pub fn failed(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            healthy: false,
            error_details: Some(details.into()),
        }
    }

    /// Create a failed result from an error, including its whole source chain
    pub fn from_error(name: impl Into<String>, err: &dyn std::error::Error) -> Self {
        let mut details = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            details.push_str("\nCaused by: ");
            details.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::failed(name, details)
    }

    /// Serialize into a JSON object, dropping `error_details` unless `debug` is set
    pub fn to_value(&self, debug: bool) -> Value {
        let mut map = Map::with_capacity(3);
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert("healthy".to_string(), Value::Bool(self.healthy));
        if debug {
            map.insert(
                "error_details".to_string(),
                self.error_details
                    .as_ref()
                    .map_or(Value::Null, |details| Value::String(details.clone())),
            );
        }
        Value::Object(map)
    }
}

impl fmt::Display for HealthCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.healthy { "healthy" } else { "unhealthy" };
        write!(f, "{}: {}", self.name, state)
    }
}
