//! Healthcheck result and report types
//!
//! A [`HealthCheckResult`] is the outcome of one check; a [`HealthcheckReport`]
//! aggregates the results of every check in a probe into a single verdict.

mod report;
mod result;


pub use report::HealthcheckReport;
pub use result::HealthCheckResult;
