//! Health check that opens a TCP connection

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

use super::types::{CheckError, DEFAULT_HC_TIMEOUT, HealthCheck};
use crate::models::HealthCheckResult;

/// Health check that succeeds when a TCP connection can be established
#[derive(Debug, Clone)]
pub struct TcpHealthCheck {
    host: String,
    port: u16,
    timeout: Duration,
    name: String,
}

impl TcpHealthCheck {
    /// Create a check for `host:port`
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: DEFAULT_HC_TIMEOUT,
            name: "TCP".to_string(),
        }
    }

    /// Set the name reported in results
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the connect timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Target address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[async_trait]
impl HealthCheck for TcpHealthCheck {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> Result<HealthCheckResult, CheckError> {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_stream)) => {
                debug!(addr = %self.address(), "TCP health check passed");
                Ok(HealthCheckResult::passed(&self.name))
            }
            Ok(Err(e)) => Ok(HealthCheckResult::from_error(&self.name, &e)),
            Err(_) => Ok(HealthCheckResult::from_error(
                &self.name,
                &CheckError::Timeout(self.timeout),
            )),
        }
    }
}
