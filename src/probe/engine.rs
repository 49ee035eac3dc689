//! Concurrent fan-out over a probe's checks

use futures::future::join_all;
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::checks::{Check, CheckError};
use crate::models::HealthCheckResult;

/// Run every check concurrently and return one result per check, in input order
///
/// Each check runs on its own task. A check that returns `Err`, panics, or
/// outlives `deadline` is reported as unhealthy; siblings are never
/// cancelled. With `deadline` unset the fan-out waits for every check to
/// resolve on its own.
pub async fn run_checks(
    probe: &str,
    checks: &[Check],
    deadline: Option<Duration>,
) -> Vec<HealthCheckResult> {
    if checks.is_empty() {
        return Vec::new();
    }

    debug!(probe = %probe, checks = checks.len(), "Running probe checks");

    let handles: Vec<_> = checks
        .iter()
        .map(|check| {
            let check = Arc::clone(check);
            tokio::spawn(async move {
                match deadline {
                    Some(deadline) => tokio::time::timeout(deadline, check.check())
                        .await
                        .unwrap_or(Err(CheckError::Timeout(deadline))),
                    None => check.check().await,
                }
            })
        })
        .collect();

    let outcomes = join_all(handles).await;

    checks
        .iter()
        .zip(outcomes)
        .map(|(check, outcome)| {
            let result = settle(check.name(), outcome);
            if result.healthy {
                debug!(probe = %probe, check = %result.name, "Check passed");
            } else {
                warn!(
                    probe = %probe,
                    check = %result.name,
                    error = result.error_details.as_deref().unwrap_or(""),
                    "Check failed"
                );
            }
            result
        })
        .collect()
}

fn settle(
    name: &str,
    outcome: Result<Result<HealthCheckResult, CheckError>, JoinError>,
) -> HealthCheckResult {
    match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => HealthCheckResult::from_error(name, &e),
        Err(join_error) if join_error.is_panic() => HealthCheckResult::failed(
            name,
            format!("check panicked: {}", panic_message(join_error.into_panic())),
        ),
        Err(join_error) => HealthCheckResult::from_error(name, &join_error),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "unknown panic payload".to_string(),
        },
    }
}
