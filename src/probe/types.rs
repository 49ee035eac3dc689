//! Probe definition

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

use crate::checks::{Check, HealthCheck};

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid separator regex"));

/// A named group of checks evaluated together, e.g. "liveness" or "readiness"
///
/// Probes are assembled once at wiring time and shared read-only by every
/// invocation afterwards.
#[derive(Clone)]
pub struct Probe {
    name: String,
    checks: Vec<Check>,
    summary: Option<String>,
}

impl Probe {
    /// Create a probe without checks
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
            summary: None,
        }
    }

    /// Create a probe from already shared checks
    pub fn with_checks(name: impl Into<String>, checks: impl IntoIterator<Item = Check>) -> Self {
        Self {
            name: name.into(),
            checks: checks.into_iter().collect(),
            summary: None,
        }
    }

    /// Append a check
    pub fn check<C>(mut self, check: C) -> Self
    where
        C: HealthCheck + 'static,
    {
        self.checks.push(Arc::new(check));
        self
    }

    /// Set the human-readable summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Probe name, also used as the route path segment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks in evaluation order
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Explicit summary, if any
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Summary shown for the probe endpoint
    ///
    /// Falls back to the name lower-cased, with each run of non-alphanumeric
    /// characters collapsed into a space, capitalized, plus " probe".
    pub fn endpoint_summary(&self) -> String {
        if let Some(summary) = self.summary.as_deref().filter(|s| !s.is_empty()) {
            return summary.to_string();
        }

        let lowered = self.name.to_lowercase();
        let title = NON_ALPHANUMERIC.replace_all(&lowered, " ");
        let mut chars = title.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{} probe", capitalized)
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checks: Vec<&str> = self.checks.iter().map(|check| check.name()).collect();
        f.debug_struct("Probe")
            .field("name", &self.name)
            .field("checks", &checks)
            .field("summary", &self.summary)
            .finish()
    }
}
