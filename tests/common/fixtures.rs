//! Check fixtures

use async_trait::async_trait;
use fast_healthchecks::{CheckError, HealthCheck, HealthCheckResult};
use std::time::Duration;

/// Check that waits `delay` and then passes or fails with `error`
#[derive(Debug, Clone)]
pub struct FixedCheck {
    pub name: String,
    pub delay: Duration,
    pub error: Option<String>,
}

#[async_trait]
impl HealthCheck for FixedCheck {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> Result<HealthCheckResult, CheckError> {
        tokio::time::sleep(self.delay).await;
        match &self.error {
            None => Ok(HealthCheckResult::passed(&self.name)),
            Some(error) => Err(CheckError::Failed(error.clone())),
        }
    }
}

/// Check that passes after `delay_ms`
pub fn passing(name: &str, delay_ms: u64) -> FixedCheck {
    FixedCheck {
        name: name.to_string(),
        delay: Duration::from_millis(delay_ms),
        error: None,
    }
}

/// Check that fails immediately with `error`
pub fn failing(name: &str, error: &str) -> FixedCheck {
    FixedCheck {
        name: name.to_string(),
        delay: Duration::ZERO,
        error: Some(error.to_string()),
    }
}
