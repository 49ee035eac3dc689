//! End-to-end probe flow tests
//!
//! Drive a probe through execution, aggregation and response construction.

#[cfg(test)]
mod tests {
    use crate::common::{failing, passing};
    use fast_healthchecks::probe::{handler, report_handler};
    use fast_healthchecks::{HealthCheckResult, Probe, ProbeEndpoint, ProbeOptions, ProbeResponse};
    use serde_json::{Value, json};

    fn readiness() -> Probe {
        Probe::new("readiness")
            .check(passing("A", 0))
            .check(failing("B", "boom"))
    }

    // ==================== Report semantics ====================

    /// Results keep check order even when the first check finishes last
    #[tokio::test]
    async fn test_results_follow_check_order() {
        let probe = Probe::new("ordering")
            .check(passing("A", 100))
            .check(passing("B", 0));
        let endpoint = ProbeEndpoint::new(probe, ProbeOptions::default()).unwrap();

        let report = endpoint.report().await;
        let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(report.healthy());
    }

    /// The readiness scenario yields one passed and one failed result
    #[tokio::test]
    async fn test_readiness_report() {
        let endpoint = ProbeEndpoint::new(readiness(), ProbeOptions::default()).unwrap();

        let report = endpoint.report().await;
        assert!(!report.healthy());
        assert!(!report.allow_partial_failure);
        assert_eq!(
            report.results,
            vec![
                HealthCheckResult::passed("A"),
                HealthCheckResult::failed("B", "boom"),
            ]
        );
        assert_eq!(report.to_string(), "A: healthy\nB: unhealthy");
    }

    /// A probe without checks is healthy
    #[tokio::test]
    async fn test_empty_probe_is_healthy() {
        let options = ProbeOptions::new().success_status(200).success_handler(report_handler());
        let endpoint = ProbeEndpoint::new(Probe::new("empty"), options).unwrap();

        let output = endpoint.call().await.unwrap();
        assert_eq!(output.status_code, 200);
        let body: Value = serde_json::from_slice(&output.body).unwrap();
        assert_eq!(body, json!({"results": []}));
    }

    // ==================== Responses ====================

    /// Default options: 503 with a literal null body
    #[tokio::test]
    async fn test_readiness_default_response() {
        let endpoint = ProbeEndpoint::new(readiness(), ProbeOptions::default()).unwrap();

        let output = endpoint.call().await.unwrap();
        assert_eq!(output.status_code, 503);
        assert_eq!(&output.body[..], b"null");
        assert_eq!(output.header("content-type"), Some("application/json"));
        assert_eq!(output.header("content-length"), Some("4"));
    }

    /// Debug payloads carry error details and the partial-failure flag
    #[tokio::test]
    async fn test_readiness_debug_response() {
        let options = ProbeOptions::new().debug(true).failure_handler(report_handler());
        let endpoint = ProbeEndpoint::new(readiness(), options).unwrap();

        let output = endpoint.call().await.unwrap();
        let body: Value = serde_json::from_slice(&output.body).unwrap();
        assert_eq!(
            body,
            json!({
                "results": [
                    {"name": "A", "healthy": true, "error_details": null},
                    {"name": "B", "healthy": false, "error_details": "boom"},
                ],
                "allow_partial_failure": false,
            })
        );
        let expected_len = output.body.len().to_string();
        assert_eq!(output.header("content-length"), Some(expected_len.as_str()));
    }

    /// Handlers see the healthy flag and the redacted report
    #[tokio::test]
    async fn test_handler_receives_probe_response() {
        let failure = handler(|response: ProbeResponse| async move {
            let failed: Vec<Value> = response.data["results"]
                .as_array()
                .into_iter()
                .flatten()
                .filter(|r| r["healthy"] == json!(false))
                .map(|r| r["name"].clone())
                .collect();
            Ok::<_, std::io::Error>(json!({"healthy": response.healthy, "failed": failed}))
        });
        let endpoint =
            ProbeEndpoint::new(readiness(), ProbeOptions::new().failure_handler(failure)).unwrap();

        let output = endpoint.call().await.unwrap();
        let body: Value = serde_json::from_slice(&output.body).unwrap();
        assert_eq!(body, json!({"healthy": false, "failed": ["B"]}));
    }

    /// Partial failure turns the readiness probe healthy
    #[tokio::test]
    async fn test_partial_failure_response() {
        let options = ProbeOptions::new().allow_partial_failure(true);
        let endpoint = ProbeEndpoint::new(readiness(), options).unwrap();

        let output = endpoint.call().await.unwrap();
        assert_eq!(output.status_code, 204);
        assert!(output.body.is_empty());
        assert!(output.headers.is_none());
    }

    /// Concurrent invocations of the same endpoint do not interfere
    #[tokio::test]
    async fn test_concurrent_invocations() {
        let endpoint = ProbeEndpoint::new(readiness(), ProbeOptions::default()).unwrap();

        let outputs = futures::future::join_all((0..10).map(|_| endpoint.call())).await;
        for output in outputs {
            assert_eq!(output.unwrap().status_code, 503);
        }
    }
}
