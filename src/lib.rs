//! # fast-healthchecks
//!
//! Named, composable health probes for async Rust services.
//!
//! A [`Probe`] groups independent readiness or liveness checks. Every call
//! runs the probe's checks concurrently, isolates each check's failure,
//! aggregates the outcomes into a [`HealthcheckReport`] and renders an
//! HTTP-style response with configurable status codes and payload handlers.
//!
//! ## Features
//!
//! - **Concurrent fan-out**: each check runs on its own task; results keep check order
//! - **Failure isolation**: errors, panics and timeouts become unhealthy results
//! - **Partial failure**: optionally report healthy while some checks fail
//! - **Response shaping**: status codes, body suppression and content handlers
//! - **Bundled checks**: functions, TCP, HTTP (`http` feature), PostgreSQL (`postgres`
//!   feature), Redis (`redis` feature)
//! - **actix-web binding**: mount every probe under a route prefix
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fast_healthchecks::checks::{FunctionHealthCheck, TcpHealthCheck};
//! use fast_healthchecks::{Probe, ProbeEndpoint, ProbeOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let probe = Probe::new("readiness")
//!         .check(TcpHealthCheck::new("localhost", 6379).with_name("Cache"))
//!         .check(FunctionHealthCheck::new(|| async { Ok::<(), std::io::Error>(()) }));
//!
//!     let endpoint = ProbeEndpoint::new(probe, ProbeOptions::default().debug(true))?;
//!     let output = endpoint.call().await?;
//!     println!("{} {:?}", output.status_code, output.body);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod checks;
pub mod config;
pub mod models;
pub mod probe;
pub mod server;
pub mod utils;

// Re-export main types
pub use checks::{CheckError, HealthCheck};
pub use config::Config;
pub use models::{HealthCheckResult, HealthcheckReport};
pub use probe::{Probe, ProbeEndpoint, ProbeOptions, ProbeOutput, ProbeResponse};
pub use server::HealthcheckRouter;
pub use utils::error::{HealthcheckError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
