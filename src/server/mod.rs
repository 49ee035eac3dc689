//! HTTP server implementation
//!
//! This module binds probe endpoints to actix-web routes and provides the
//! standalone healthcheck server.

pub mod builder;
pub mod router;
pub mod server;

#[cfg(test)]
mod tests;

pub use builder::{ServerBuilder, run_server};
pub use router::HealthcheckRouter;
pub use server::HttpServer;
