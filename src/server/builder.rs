//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{HealthcheckError, Result};
use std::path::Path;
use tracing::info;

/// Server builder for easier configuration
#[derive(Debug, Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| HealthcheckError::config("Configuration is required"))?;

        config.validate()?;
        HttpServer::new(&config)
    }
}

/// Load the configuration file and run the server
pub async fn run_server(config_path: impl AsRef<Path>) -> Result<()> {
    info!("Starting healthcheck server");

    let config = Config::from_file(config_path).await?;
    serve(config).await
}

/// Run the server with an already loaded configuration
pub async fn serve(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build()?;

    info!("Probe endpoints:");
    for path in server.router().paths() {
        info!("   GET  {}", path);
    }

    server.start().await
}
