//! Health check that pings Redis

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use super::types::{BoxError, CheckError, DEFAULT_HC_TIMEOUT, HealthCheck};
use crate::models::HealthCheckResult;
use crate::utils::error::{HealthcheckError, Result};

/// Health check that opens a connection to Redis and sends `PING`
#[derive(Clone)]
pub struct RedisHealthCheck {
    dsn: String,
    timeout: Duration,
    name: String,
}

impl RedisHealthCheck {
    /// Create a check for a Redis server on `host:port`, database 0
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            dsn: format!("redis://{}:{}/0", host, port),
            timeout: DEFAULT_HC_TIMEOUT,
            name: "Redis".to_string(),
        }
    }

    /// Create a check from a `redis://` or `rediss://` DSN
    pub fn from_dsn(dsn: &str) -> Result<Self> {
        let parsed = url::Url::parse(dsn)
            .map_err(|e| HealthcheckError::config(format!("Invalid Redis DSN: {}", e)))?;

        match parsed.scheme() {
            "redis" | "rediss" => {}
            scheme => {
                return Err(HealthcheckError::config(format!(
                    "Redis DSN must use redis:// or rediss:// scheme, got: {}",
                    scheme
                )));
            }
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(HealthcheckError::config("Redis DSN must have a host"));
        }

        Ok(Self {
            dsn: dsn.to_string(),
            timeout: DEFAULT_HC_TIMEOUT,
            name: "Redis".to_string(),
        })
    }

    /// Set the name reported in results
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the connection timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// DSN with the password masked, for logging
    pub fn sanitized_dsn(&self) -> String {
        match url::Url::parse(&self.dsn) {
            Ok(mut parsed) => {
                if parsed.password().is_some() {
                    let _ = parsed.set_password(Some("***"));
                }
                parsed.to_string()
            }
            Err(_) => "invalid_url".to_string(),
        }
    }

    async fn ping(&self) -> std::result::Result<(), BoxError> {
        let client = redis::Client::open(self.dsn.as_str())?;
        let mut conn = client.get_multiplexed_async_connection().await?;
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        if reply != "PONG" {
            return Err(format!("unexpected PING reply: {}", reply).into());
        }
        Ok(())
    }
}

impl fmt::Debug for RedisHealthCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisHealthCheck")
            .field("dsn", &self.sanitized_dsn())
            .field("timeout", &self.timeout)
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait]
impl HealthCheck for RedisHealthCheck {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> std::result::Result<HealthCheckResult, CheckError> {
        match tokio::time::timeout(self.timeout, self.ping()).await {
            Ok(Ok(())) => {
                debug!(dsn = %self.sanitized_dsn(), "Redis health check passed");
                Ok(HealthCheckResult::passed(&self.name))
            }
            Ok(Err(e)) => Ok(HealthCheckResult::from_error(&self.name, e.as_ref())),
            Err(_) => Ok(HealthCheckResult::from_error(
                &self.name,
                &CheckError::Timeout(self.timeout),
            )),
        }
    }
}
