//! Health check trait and shared types

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::HealthCheckResult;

/// Default timeout applied by the bundled checks
pub const DEFAULT_HC_TIMEOUT: Duration = Duration::from_secs(5);

/// Boxed error type accepted from user-supplied check functions and handlers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared, type-erased health check as stored in a probe
pub type Check = Arc<dyn HealthCheck>;

/// Error signaled by a health check instead of returning a result
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check did not resolve in time
    #[error("check timed out after {0:?}")]
    Timeout(Duration),

    /// The check failed with a message
    #[error("{0}")]
    Failed(String),

    /// The check failed with an underlying error
    #[error(transparent)]
    Backend(BoxError),
}

impl CheckError {
    /// Wrap any error as a backend failure
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

impl From<BoxError> for CheckError {
    fn from(err: BoxError) -> Self {
        Self::Backend(err)
    }
}

/// A single readiness or liveness check
///
/// Implementations must resolve in bounded time; the probe engine does not
/// impose a deadline of its own unless one is configured. Returning `Err` is
/// equivalent to returning an unhealthy result carrying the error text.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Name reported in the check result
    fn name(&self) -> &str;

    /// Run the check once
    async fn check(&self) -> Result<HealthCheckResult, CheckError>;
}
