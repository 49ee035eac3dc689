//! Configuration file tests

#[cfg(test)]
mod tests {
    use fast_healthchecks::{Config, HealthcheckError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONFIG: &str = r#"
server:
  host: 127.0.0.1
  port: 9000
health:
  prefix: /checks
  report_body: true
  deadline: 2.5
probes:
  - name: liveness
    checks:
      - type: static
        name: Process
  - name: readiness
    checks:
      - type: static
        name: Cache
        healthy: false
        message: cache cold
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let file = write_config(CONFIG);

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server.address(), "127.0.0.1:9000");
        assert!(config.health.report_body);
        assert_eq!(config.health.deadline, Some(2.5));
        assert_eq!(config.probes.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = Config::from_file(dir.path().join("absent.yaml")).await.unwrap_err();
        assert!(matches!(err, HealthcheckError::Config(_)));
    }

    #[tokio::test]
    async fn test_duplicate_probe_names_rejected() {
        let file = write_config("probes:\n  - name: liveness\n  - name: liveness\n");

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, HealthcheckError::Config(_)));
    }

    /// A loaded file serves its probes through the actix binding
    #[actix_web::test]
    async fn test_file_to_router() {
        use actix_web::http::StatusCode;
        use actix_web::{App, test};
        use serde_json::{Value, json};

        let file = write_config(CONFIG);
        let config = Config::from_file(file.path()).await.unwrap();
        let router = config.build_router().unwrap();
        assert_eq!(router.paths(), vec!["/checks/liveness", "/checks/readiness"]);

        let app = test::init_service(App::new().configure(|cfg| router.configure(cfg))).await;

        let req = test::TestRequest::get().uri("/checks/liveness").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/checks/readiness").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body, json!({"results": [{"name": "Cache", "healthy": false}]}));
    }
}
