//! Building probes and routers from configuration

use std::sync::Arc;
use std::time::Duration;

use super::Config;
use super::models::*;
use crate::checks::{Check, FunctionHealthCheck, TcpHealthCheck};
use crate::probe::Probe;
use crate::server::HealthcheckRouter;
use crate::utils::error::{HealthcheckError, Result};

impl Config {
    /// Build the probes described by the configuration
    pub fn build_probes(&self) -> Result<Vec<Probe>> {
        self.probes.iter().map(ProbeConfig::build).collect()
    }

    /// Build a router serving every configured probe
    pub fn build_router(&self) -> Result<HealthcheckRouter> {
        let router = HealthcheckRouter::new(self.build_probes()?, self.health.probe_options()?)?;
        Ok(router.with_prefix(&self.health.prefix))
    }
}

impl ProbeConfig {
    /// Build the probe and all of its checks
    pub fn build(&self) -> Result<Probe> {
        let checks = self
            .checks
            .iter()
            .map(CheckConfig::build)
            .collect::<Result<Vec<_>>>()?;

        let probe = Probe::with_checks(&self.name, checks);
        Ok(match &self.summary {
            Some(summary) => probe.with_summary(summary),
            None => probe,
        })
    }
}

impl CheckConfig {
    /// Build the check
    pub fn build(&self) -> Result<Check> {
        let timeout = Duration::try_from_secs_f64(self.timeout()).map_err(|e| {
            HealthcheckError::config(format!("Invalid timeout for {} check: {}", self.kind(), e))
        })?;
        match self {
            CheckConfig::Static(c) => Ok(c.build(timeout)),
            CheckConfig::Url(c) => c.build(timeout),
            CheckConfig::Redis(c) => c.build(timeout),
            CheckConfig::Postgres(c) => c.build(timeout),
            CheckConfig::Tcp(c) => Ok(c.build(timeout)),
        }
    }
}

impl StaticCheckConfig {
    fn build(&self, timeout: Duration) -> Check {
        let healthy = self.healthy;
        let delay = Duration::from_millis(self.delay_ms);
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| "static check configured to fail".to_string());

        let mut check = FunctionHealthCheck::new(move || {
            let message = message.clone();
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                if healthy { Ok(()) } else { Err(message) }
            }
        })
        .with_timeout(timeout);

        if let Some(name) = &self.name {
            check = check.with_name(name);
        }
        Arc::new(check)
    }
}

impl UrlCheckConfig {
    #[cfg(feature = "http")]
    fn build(&self, timeout: Duration) -> Result<Check> {
        let mut check = crate::checks::UrlHealthCheck::new(&self.url)
            .verify_ssl(self.verify_ssl)
            .follow_redirects(self.follow_redirects)
            .with_timeout(timeout);

        if let Some(username) = &self.username {
            check = check.with_credentials(username, self.password.clone());
        }
        if let Some(name) = &self.name {
            check = check.with_name(name);
        }
        Ok(Arc::new(check))
    }

    #[cfg(not(feature = "http"))]
    fn build(&self, _timeout: Duration) -> Result<Check> {
        Err(HealthcheckError::config(format!(
            "URL check for {} requires the `http` feature",
            self.url
        )))
    }
}

impl RedisCheckConfig {
    #[cfg(feature = "redis")]
    fn build(&self, timeout: Duration) -> Result<Check> {
        let mut check = crate::checks::RedisHealthCheck::from_dsn(&self.dsn)?.with_timeout(timeout);
        if let Some(name) = &self.name {
            check = check.with_name(name);
        }
        Ok(Arc::new(check))
    }

    #[cfg(not(feature = "redis"))]
    fn build(&self, _timeout: Duration) -> Result<Check> {
        Err(HealthcheckError::config("Redis checks require the `redis` feature"))
    }
}

impl PostgresCheckConfig {
    #[cfg(feature = "postgres")]
    fn build(&self, timeout: Duration) -> Result<Check> {
        let mut check =
            crate::checks::PostgresHealthCheck::from_dsn(&self.dsn)?.with_timeout(timeout);
        if let Some(name) = &self.name {
            check = check.with_name(name);
        }
        Ok(Arc::new(check))
    }

    #[cfg(not(feature = "postgres"))]
    fn build(&self, _timeout: Duration) -> Result<Check> {
        Err(HealthcheckError::config("PostgreSQL checks require the `postgres` feature"))
    }
}

impl TcpCheckConfig {
    fn build(&self, timeout: Duration) -> Check {
        let mut check = TcpHealthCheck::new(&self.host, self.port).with_timeout(timeout);
        if let Some(name) = &self.name {
            check = check.with_name(name);
        }
        Arc::new(check)
    }
}
