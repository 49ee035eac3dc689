//! Probe response construction

use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::engine::run_checks;
use super::handlers::{ContentHandler, default_handler};
use super::types::Probe;
use crate::models::HealthcheckReport;
use crate::utils::error::{HealthcheckError, Result};

const STATUS_OK: u16 = 200;
const STATUS_NO_CONTENT: u16 = 204;
const STATUS_NOT_MODIFIED: u16 = 304;
const STATUS_SERVICE_UNAVAILABLE: u16 = 503;

/// Outcome of a probe as handed to content handlers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResponse {
    /// Serialized report, redacted unless debug is enabled
    pub data: Map<String, Value>,
    /// Overall verdict of the report
    pub healthy: bool,
}

/// Transport-agnostic response produced by a probe endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutput {
    /// JSON body, empty when the status carries no content
    pub body: Bytes,
    /// `content-type` and `content-length`, present only with a body
    pub headers: Option<HashMap<String, String>>,
    /// HTTP status code
    pub status_code: u16,
}

impl ProbeOutput {
    /// Response without a body
    pub fn empty(status_code: u16) -> Self {
        Self {
            body: Bytes::new(),
            headers: None,
            status_code,
        }
    }

    /// Response carrying an encoded JSON body
    pub fn json(body: Vec<u8>, status_code: u16) -> Self {
        let mut headers = HashMap::with_capacity(2);
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("content-length".to_string(), body.len().to_string());
        Self {
            body: Bytes::from(body),
            headers: Some(headers),
            status_code,
        }
    }

    /// Header value by lower-case name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(name))
            .map(String::as_str)
    }
}

/// Options controlling how a probe outcome becomes a response
#[derive(Clone)]
pub struct ProbeOptions {
    /// Status when the report is healthy
    pub success_status: u16,
    /// Status when the report is unhealthy
    pub failure_status: u16,
    /// Body shaper for healthy reports
    pub success_handler: ContentHandler,
    /// Body shaper for unhealthy reports
    pub failure_handler: ContentHandler,
    /// Keep `allow_partial_failure` and `error_details` in the handler payload
    pub debug: bool,
    /// Report healthy even when some checks fail
    pub allow_partial_failure: bool,
    /// Outer bound on each check, off by default
    pub deadline: Option<Duration>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            success_status: STATUS_NO_CONTENT,
            failure_status: STATUS_SERVICE_UNAVAILABLE,
            success_handler: default_handler(),
            failure_handler: default_handler(),
            debug: false,
            allow_partial_failure: false,
            deadline: None,
        }
    }
}

impl fmt::Debug for ProbeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeOptions")
            .field("success_status", &self.success_status)
            .field("failure_status", &self.failure_status)
            .field("debug", &self.debug)
            .field("allow_partial_failure", &self.allow_partial_failure)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl ProbeOptions {
    /// Create options with the defaults: 204 on success, 503 on failure
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the success status code
    pub fn success_status(mut self, status: u16) -> Self {
        self.success_status = status;
        self
    }

    /// Set the failure status code
    pub fn failure_status(mut self, status: u16) -> Self {
        self.failure_status = status;
        self
    }

    /// Set the handler shaping healthy responses
    pub fn success_handler(mut self, handler: ContentHandler) -> Self {
        self.success_handler = handler;
        self
    }

    /// Set the handler shaping unhealthy responses
    pub fn failure_handler(mut self, handler: ContentHandler) -> Self {
        self.failure_handler = handler;
        self
    }

    /// Enable or disable debug payloads
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Allow the report to be healthy despite failed checks
    pub fn allow_partial_failure(mut self, allow: bool) -> Self {
        self.allow_partial_failure = allow;
        self
    }

    /// Bound every check by an outer deadline
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Reject status codes that cannot be sent on the wire
    pub fn validate(&self) -> Result<()> {
        for status in [self.success_status, self.failure_status] {
            if !(100..=599).contains(&status) {
                return Err(HealthcheckError::InvalidStatus(status));
            }
        }
        Ok(())
    }

    /// Status code for the given verdict
    pub fn status_for(&self, healthy: bool) -> u16 {
        if healthy {
            self.success_status
        } else {
            self.failure_status
        }
    }

    /// Whether a response with the given verdict carries a body
    ///
    /// No body for 204 and 304, nor for informational success statuses.
    pub fn content_needed(&self, healthy: bool) -> bool {
        let status = self.status_for(healthy);
        let informational = healthy && self.success_status < STATUS_OK;
        let bodiless = status == STATUS_NO_CONTENT || status == STATUS_NOT_MODIFIED;
        !(informational || bodiless)
    }

    /// Turn a report into a response
    ///
    /// Errors from the content handler are returned to the caller.
    pub async fn render(&self, report: &HealthcheckReport) -> Result<ProbeOutput> {
        let healthy = report.healthy();
        let status_code = self.status_for(healthy);
        let handler = if healthy {
            &self.success_handler
        } else {
            &self.failure_handler
        };
        let response = ProbeResponse {
            data: report.to_data(self.debug),
            healthy,
        };

        if !self.content_needed(healthy) {
            return Ok(ProbeOutput::empty(status_code));
        }

        let payload = handler(response)
            .await
            .map_err(|e| HealthcheckError::handler(e.to_string()))?;
        let body = serde_json::to_vec(&payload)?;

        Ok(ProbeOutput::json(body, status_code))
    }
}

/// A probe bound to its response options
#[derive(Debug, Clone)]
pub struct ProbeEndpoint {
    probe: Arc<Probe>,
    options: ProbeOptions,
}

impl ProbeEndpoint {
    /// Bind a probe to options, validating the status codes
    pub fn new(probe: Probe, options: ProbeOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            probe: Arc::new(probe),
            options,
        })
    }

    /// The probe served by this endpoint
    pub fn probe(&self) -> &Probe {
        &self.probe
    }

    /// Response options
    pub fn options(&self) -> &ProbeOptions {
        &self.options
    }

    /// Run the probe's checks and aggregate them into a report
    pub async fn report(&self) -> HealthcheckReport {
        let results = run_checks(
            self.probe.name(),
            self.probe.checks(),
            self.options.deadline,
        )
        .await;
        HealthcheckReport::new(results).with_partial_failure(self.options.allow_partial_failure)
    }

    /// Run the probe and build the response
    pub async fn call(&self) -> Result<ProbeOutput> {
        let report = self.report().await;
        let output = self.options.render(&report).await?;

        debug!(
            probe = %self.probe.name(),
            healthy = report.healthy(),
            status = output.status_code,
            body_len = output.body.len(),
            "Probe completed"
        );

        Ok(output)
    }
}
