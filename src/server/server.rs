//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::router::HealthcheckRouter;
use crate::utils::error::Result;
use actix_web::{App, HttpServer as ActixHttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server serving the configured probes
#[derive(Debug)]
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Probe routes
    router: HealthcheckRouter,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let router = config.build_router()?;

        Ok(Self {
            config: config.server.clone(),
            router,
        })
    }

    /// Probe routes served by this server
    pub fn router(&self) -> &HealthcheckRouter {
        &self.router
    }

    /// Start the HTTP server and run until it is stopped
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let router = self.router.clone();
        let mut server = ActixHttpServer::new(move || {
            let router = router.clone();
            App::new()
                .wrap(TracingLogger::default())
                .configure(move |cfg| router.configure(cfg))
        });

        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        server.bind(&bind_addr)?.run().await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
