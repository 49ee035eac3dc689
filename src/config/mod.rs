//! Configuration management for the healthcheck server
//!
//! This module handles loading, validation, and construction of the probes
//! served by the standalone server. Library users wire probes in code and
//! do not need it.

pub mod builder;
pub mod models;
pub mod validation;


pub use models::*;
pub use validation::Validate;

use crate::utils::error::{HealthcheckError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

static ENV_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid env reference regex")
});

/// Main configuration struct for the healthcheck server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Probe response configuration
    #[serde(default)]
    pub health: HealthConfig,
    /// Probes to serve
    #[serde(default)]
    pub probes: Vec<ProbeConfig>,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| HealthcheckError::config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from YAML text
    ///
    /// `${VAR}` references are replaced with environment variables first.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let expanded = expand_env(content)?;

        let config: Self = serde_yaml::from_str(&expanded)?;

        config.validate()?;

        debug!(probes = config.probes.len(), "Configuration loaded successfully");
        Ok(config)
    }

    /// Override the listen host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.host = host.into();
        self
    }

    /// Override the listen port
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}

/// Replace `${VAR}` references with environment values
///
/// Whole-line YAML comments are copied through untouched.
fn expand_env(content: &str) -> Result<String> {
    let mut missing = Vec::new();
    let mut expanded = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            expanded.push_str(line);
            continue;
        }
        let replaced = ENV_REFERENCE.replace_all(line, |caps: &Captures<'_>| {
            let var = &caps[1];
            std::env::var(var).unwrap_or_else(|_| {
                missing.push(var.to_string());
                String::new()
            })
        });
        expanded.push_str(&replaced);
    }

    if !missing.is_empty() {
        return Err(HealthcheckError::config(format!(
            "Environment variables referenced in config are not set: {}",
            missing.join(", ")
        )));
    }

    Ok(expanded)
}
