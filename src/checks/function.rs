//! Health check backed by a user-supplied function

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::types::{BoxError, CheckError, DEFAULT_HC_TIMEOUT, HealthCheck};
use crate::models::HealthCheckResult;

type CheckFn = dyn Fn() -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync;

/// Health check that calls a function and reports whether it succeeded
///
/// The function is healthy when it returns `Ok(())` within the timeout.
///
/// ```rust
/// use fast_healthchecks::checks::FunctionHealthCheck;
///
/// let check = FunctionHealthCheck::new(|| async { Ok::<(), std::io::Error>(()) })
///     .with_name("Async dummy");
/// ```
#[derive(Clone)]
pub struct FunctionHealthCheck {
    func: Arc<CheckFn>,
    timeout: Duration,
    name: String,
}

impl FunctionHealthCheck {
    /// Create a check from an async function
    pub fn new<F, Fut, E>(func: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError>,
    {
        let func = move || {
            func()
                .map(|result| result.map_err(Into::<BoxError>::into))
                .boxed()
        };
        Self {
            func: Arc::new(func),
            timeout: DEFAULT_HC_TIMEOUT,
            name: "Function".to_string(),
        }
    }

    /// Create a check from a blocking function, run on the blocking thread pool
    pub fn blocking<F, E>(func: F) -> Self
    where
        F: Fn() -> Result<(), E> + Send + Sync + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        let func = Arc::new(func);
        Self::new(move || {
            let func = Arc::clone(&func);
            async move {
                match tokio::task::spawn_blocking(move || func()).await {
                    Ok(result) => result.map_err(Into::<BoxError>::into),
                    Err(join_error) => Err(BoxError::from(join_error)),
                }
            }
        })
    }

    /// Set the name reported in results
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for FunctionHealthCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionHealthCheck")
            .field("name", &self.name)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HealthCheck for FunctionHealthCheck {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> Result<HealthCheckResult, CheckError> {
        match tokio::time::timeout(self.timeout, (self.func)()).await {
            Ok(Ok(())) => Ok(HealthCheckResult::passed(&self.name)),
            Ok(Err(e)) => Ok(HealthCheckResult::from_error(&self.name, e.as_ref())),
            Err(_) => Ok(HealthCheckResult::from_error(
                &self.name,
                &CheckError::Timeout(self.timeout),
            )),
        }
    }
}
