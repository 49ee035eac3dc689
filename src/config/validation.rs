//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::Config;
use super::models::*;
use crate::utils::error::{HealthcheckError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

static PATH_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("Invalid path segment regex"));

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> std::result::Result<(), String>;
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| HealthcheckError::config(format!("Server config error: {}", e)))?;

        self.health
            .validate()
            .map_err(|e| HealthcheckError::config(format!("Health config error: {}", e)))?;

        if self.probes.is_empty() {
            return Err(HealthcheckError::config("At least one probe must be configured"));
        }

        let mut names = HashSet::new();
        for probe in &self.probes {
            if !names.insert(probe.name.as_str()) {
                return Err(HealthcheckError::config(format!(
                    "Duplicate probe name: {}",
                    probe.name
                )));
            }
            probe.validate().map_err(|e| {
                HealthcheckError::config(format!("Probe '{}' config error: {}", probe.name, e))
            })?;
        }

        debug!("Configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }
        if self.workers == Some(0) {
            return Err("Workers cannot be 0".to_string());
        }
        Ok(())
    }
}

impl Validate for HealthConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        for (field, status) in [
            ("success_status", self.success_status),
            ("failure_status", self.failure_status),
        ] {
            if !(100..=599).contains(&status) {
                return Err(format!("{} must be between 100 and 599, got {}", field, status));
            }
        }
        if !self.prefix.is_empty() && !self.prefix.starts_with('/') {
            return Err(format!("Prefix must start with '/', got {}", self.prefix));
        }
        if let Some(deadline) = self.deadline {
            validate_seconds("deadline", deadline)?;
        }
        Ok(())
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if !PATH_SEGMENT.is_match(&self.name) {
            return Err(format!(
                "Probe name must be a non-empty path segment of [A-Za-z0-9._~-], got '{}'",
                self.name
            ));
        }
        for (index, check) in self.checks.iter().enumerate() {
            check
                .validate()
                .map_err(|e| format!("check #{} ({}): {}", index + 1, check.kind(), e))?;
        }
        Ok(())
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.name().is_some_and(|name| name.trim().is_empty()) {
            return Err("Check name cannot be empty".to_string());
        }
        validate_seconds("timeout", self.timeout())?;

        match self {
            CheckConfig::Static(_) => Ok(()),
            CheckConfig::Url(c) => validate_url(&c.url),
            CheckConfig::Redis(c) => validate_redis_dsn(&c.dsn),
            CheckConfig::Postgres(c) => validate_postgres_dsn(&c.dsn),
            CheckConfig::Tcp(c) => {
                if c.host.is_empty() {
                    return Err("Host cannot be empty".to_string());
                }
                if c.port == 0 {
                    return Err("Port cannot be 0".to_string());
                }
                Ok(())
            }
        }
    }
}

fn validate_seconds(field: &str, seconds: f64) -> std::result::Result<(), String> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("{} must be a positive number of seconds, got {}", field, seconds));
    }
    Ok(())
}

fn validate_url(url_str: &str) -> std::result::Result<(), String> {
    let url = Url::parse(url_str).map_err(|e| format!("Invalid URL format: {}", e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("URL must use http:// or https:// scheme, got: {}", scheme)),
    }
}

fn validate_redis_dsn(dsn: &str) -> std::result::Result<(), String> {
    let url = Url::parse(dsn).map_err(|e| format!("Invalid Redis DSN: {}", e))?;
    match url.scheme() {
        "redis" | "rediss" => Ok(()),
        scheme => Err(format!(
            "Redis DSN must use redis:// or rediss:// scheme, got: {}",
            scheme
        )),
    }
}

fn validate_postgres_dsn(dsn: &str) -> std::result::Result<(), String> {
    let url = Url::parse(dsn).map_err(|e| format!("Invalid PostgreSQL DSN: {}", e))?;
    match url.scheme() {
        "postgres" | "postgresql" => Ok(()),
        scheme => Err(format!(
            "PostgreSQL DSN must use postgres:// or postgresql:// scheme, got: {}",
            scheme
        )),
    }
}
