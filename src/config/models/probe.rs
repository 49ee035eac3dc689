//! Probe and check configuration

use super::*;
use serde::{Deserialize, Serialize};

/// A probe and its checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Probe name, used as the route path segment
    pub name: String,
    /// Human-readable summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Checks, in evaluation order
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// A check, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckConfig {
    /// Fixed outcome after an optional delay
    Static(StaticCheckConfig),
    /// HTTP GET against a URL
    Url(UrlCheckConfig),
    /// Redis `PING`
    Redis(RedisCheckConfig),
    /// PostgreSQL `SELECT 1`
    Postgres(PostgresCheckConfig),
    /// TCP connect
    Tcp(TcpCheckConfig),
}

impl CheckConfig {
    /// Check type as written in the configuration
    pub fn kind(&self) -> &'static str {
        match self {
            CheckConfig::Static(_) => "static",
            CheckConfig::Url(_) => "url",
            CheckConfig::Redis(_) => "redis",
            CheckConfig::Postgres(_) => "postgres",
            CheckConfig::Tcp(_) => "tcp",
        }
    }

    /// Configured check name, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            CheckConfig::Static(c) => c.name.as_deref(),
            CheckConfig::Url(c) => c.name.as_deref(),
            CheckConfig::Redis(c) => c.name.as_deref(),
            CheckConfig::Postgres(c) => c.name.as_deref(),
            CheckConfig::Tcp(c) => c.name.as_deref(),
        }
    }

    /// Timeout in seconds
    pub fn timeout(&self) -> f64 {
        match self {
            CheckConfig::Static(c) => c.timeout,
            CheckConfig::Url(c) => c.timeout,
            CheckConfig::Redis(c) => c.timeout,
            CheckConfig::Postgres(c) => c.timeout,
            CheckConfig::Tcp(c) => c.timeout,
        }
    }
}

/// Check reporting a fixed outcome, useful for smoke tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticCheckConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub healthy: bool,
    /// Error reported when `healthy` is false
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default = "default_check_timeout")]
    pub timeout: f64,
}

/// HTTP check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlCheckConfig {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_true")]
    pub verify_ssl: bool,
    #[serde(default = "default_true")]
    pub follow_redirects: bool,
    #[serde(default = "default_check_timeout")]
    pub timeout: f64,
}

/// Redis check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisCheckConfig {
    pub dsn: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_check_timeout")]
    pub timeout: f64,
}

/// PostgreSQL check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgresCheckConfig {
    pub dsn: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_check_timeout")]
    pub timeout: f64,
}

/// TCP check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcpCheckConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_check_timeout")]
    pub timeout: f64,
}
