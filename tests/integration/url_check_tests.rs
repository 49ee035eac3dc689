//! HTTP check tests against a mock server

#[cfg(test)]
mod tests {
    use fast_healthchecks::HealthCheck;
    use fast_healthchecks::checks::UrlHealthCheck;
    use std::time::Duration;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_status(status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_success_status_is_healthy() {
        let server = mock_status(200).await;
        let check = UrlHealthCheck::new(format!("{}/status", server.uri()));

        let result = check.check().await.unwrap();
        assert_eq!(result.name, "HTTP");
        assert!(result.healthy);
        assert!(result.error_details.is_none());
    }

    #[tokio::test]
    async fn test_server_error_reports_details() {
        let server = mock_status(500).await;
        let check = UrlHealthCheck::new(format!("{}/status", server.uri())).with_name("Upstream");

        let result = check.check().await.unwrap();
        assert_eq!(result.name, "Upstream");
        assert!(!result.healthy);
        assert!(result.error_details.unwrap().contains("500"));
    }

    /// Non-2xx client errors are unhealthy without details
    #[tokio::test]
    async fn test_not_found_is_unhealthy() {
        let server = mock_status(404).await;
        let check = UrlHealthCheck::new(format!("{}/status", server.uri()));

        let result = check.check().await.unwrap();
        assert!(!result.healthy);
        assert!(result.error_details.is_none());
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let check = UrlHealthCheck::new(format!("{}/status", server.uri()))
            .with_credentials("monitor", Some("wrong".to_string()));

        let result = check.check().await.unwrap();
        assert!(!result.healthy);
        assert!(result.error_details.unwrap().contains("401"));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let check = UrlHealthCheck::new(server.uri()).with_timeout(Duration::from_millis(100));

        let result = check.check().await.unwrap();
        assert!(!result.healthy);
        assert!(result.error_details.is_some());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let check = UrlHealthCheck::new("http://127.0.0.1:1/status")
            .with_timeout(Duration::from_millis(500));

        let result = check.check().await.unwrap();
        assert!(!result.healthy);
        assert!(result.error_details.is_some());
    }
}
