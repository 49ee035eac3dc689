//! actix-web route binding tests

#[cfg(test)]
mod tests {
    use crate::common::{failing, passing};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use fast_healthchecks::probe::report_handler;
    use fast_healthchecks::{HealthcheckRouter, Probe, ProbeOptions};
    use serde_json::{Value, json};

    fn probes() -> Vec<Probe> {
        vec![
            Probe::new("liveness").check(passing("Process", 0)),
            Probe::new("readiness")
                .check(passing("A", 20))
                .check(failing("B", "boom")),
        ]
    }

    /// Default options: 204 without body on success, 503 with null on failure
    #[actix_web::test]
    async fn test_default_routes() {
        let router = HealthcheckRouter::new(probes(), ProbeOptions::default()).unwrap();
        let app = test::init_service(App::new().configure(|cfg| router.configure(cfg))).await;

        let req = test::TestRequest::get().uri("/health/liveness").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get().uri("/health/readiness").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(&test::read_body(resp).await[..], b"null");
    }

    /// Custom prefix, statuses and debug report bodies
    #[actix_web::test]
    async fn test_custom_routes() {
        let options = ProbeOptions::new()
            .success_status(200)
            .failure_status(500)
            .success_handler(report_handler())
            .failure_handler(report_handler())
            .debug(true);
        let router = HealthcheckRouter::new(probes(), options)
            .unwrap()
            .with_prefix("/probes");
        let app = test::init_service(App::new().configure(|cfg| router.configure(cfg))).await;

        let req = test::TestRequest::get().uri("/probes/liveness").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({
                "results": [{"name": "Process", "healthy": true, "error_details": null}],
                "allow_partial_failure": false,
            })
        );

        let req = test::TestRequest::get().uri("/probes/readiness").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["results"][1]["error_details"], json!("boom"));

        let req = test::TestRequest::get().uri("/health/liveness").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    /// Probe routes only answer GET
    #[actix_web::test]
    async fn test_post_not_routed() {
        let router = HealthcheckRouter::new(probes(), ProbeOptions::default()).unwrap();
        let app = test::init_service(App::new().configure(|cfg| router.configure(cfg))).await;

        let req = test::TestRequest::post().uri("/health/liveness").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
