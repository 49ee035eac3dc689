//! Probe execution and response construction
//!
//! This module provides:
//! - [`Probe`]: a named, ordered group of checks
//! - [`run_checks`]: the concurrent fan-out over a probe's checks
//! - [`ProbeEndpoint`]: runs a probe and shapes the outcome into a
//!   transport-agnostic [`ProbeOutput`] according to [`ProbeOptions`]

mod engine;
mod finite;
mod handlers;
mod response;
mod types;


pub use engine::run_checks;
pub use handlers::{ContentHandler, HandlerFuture, default_handler, handler, report_handler};
pub use response::{ProbeEndpoint, ProbeOptions, ProbeOutput, ProbeResponse};
pub use types::Probe;
