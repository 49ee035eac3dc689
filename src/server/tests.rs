//! Server tests

#![cfg(test)]

use actix_web::http::StatusCode;
use actix_web::{App, test};

use super::router::into_http_response;
use super::{HealthcheckRouter, ServerBuilder};
use crate::checks::FunctionHealthCheck;
use crate::config::{CheckConfig, Config, ProbeConfig, StaticCheckConfig};
use crate::probe::{Probe, ProbeOptions, ProbeOutput};

fn static_probe(name: &str, healthy: bool) -> ProbeConfig {
    ProbeConfig {
        name: name.to_string(),
        summary: None,
        checks: vec![CheckConfig::Static(StaticCheckConfig {
            name: Some(format!("{}-check", name)),
            healthy,
            message: None,
            delay_ms: 0,
            timeout: 1.0,
        })],
    }
}

#[::core::prelude::v1::test]
fn test_server_builder_requires_config() {
    assert!(ServerBuilder::new().build().is_err());
}

#[::core::prelude::v1::test]
fn test_server_builder_with_config() {
    let config = Config {
        probes: vec![static_probe("liveness", true)],
        ..Config::default()
    };
    let server = ServerBuilder::new().with_config(config).build().unwrap();
    assert_eq!(server.router().paths(), vec!["/health/liveness"]);
}

#[::core::prelude::v1::test]
fn test_prefix_normalization() {
    let router = HealthcheckRouter::new([Probe::new("liveness")], ProbeOptions::default()).unwrap();
    assert_eq!(router.prefix(), "/health");
    assert_eq!(router.clone().with_prefix("probes/").prefix(), "/probes");
    assert_eq!(router.clone().with_prefix("/").prefix(), "");
    assert_eq!(router.with_prefix("").paths(), vec!["/liveness"]);
}

#[::core::prelude::v1::test]
fn test_into_http_response() {
    let response = into_http_response(ProbeOutput::empty(204)).unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = into_http_response(ProbeOutput::json(b"null".to_vec(), 503)).unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    assert!(into_http_response(ProbeOutput::empty(1000)).is_err());
}

#[actix_web::test]
async fn test_router_serves_probes() {
    let liveness = Probe::new("liveness").check(FunctionHealthCheck::new(|| async {
        Ok::<(), std::io::Error>(())
    }));
    let readiness = Probe::new("readiness").check(FunctionHealthCheck::new(|| async {
        Err::<(), _>(std::io::Error::other("boom"))
    }));
    let router = HealthcheckRouter::new([liveness, readiness], ProbeOptions::default()).unwrap();

    let app = test::init_service(App::new().configure(|cfg| router.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/health/liveness").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/health/readiness").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"null");

    let req = test::TestRequest::get().uri("/health/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
