//! Route binding for probe endpoints

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_LENGTH;
use actix_web::{HttpResponse, web};
use std::sync::Arc;
use tracing::debug;

use crate::probe::{Probe, ProbeEndpoint, ProbeOptions, ProbeOutput};
use crate::utils::error::{HealthcheckError, Result};

/// Default mount point for probe routes
pub const DEFAULT_PREFIX: &str = "/health";

/// Registers `GET {prefix}/{probe name}` for each probe
///
/// ```rust,no_run
/// use actix_web::{App, HttpServer};
/// use fast_healthchecks::probe::{Probe, ProbeOptions};
/// use fast_healthchecks::server::HealthcheckRouter;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let router = HealthcheckRouter::new([Probe::new("liveness")], ProbeOptions::default())?;
/// HttpServer::new(move || {
///     let router = router.clone();
///     App::new().configure(move |cfg| router.configure(cfg))
/// })
/// .bind("127.0.0.1:8080")?
/// .run()
/// .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HealthcheckRouter {
    prefix: String,
    endpoints: Vec<Arc<ProbeEndpoint>>,
}

impl HealthcheckRouter {
    /// Bind every probe to the same options under the default prefix
    pub fn new(probes: impl IntoIterator<Item = Probe>, options: ProbeOptions) -> Result<Self> {
        let endpoints = probes
            .into_iter()
            .map(|probe| ProbeEndpoint::new(probe, options.clone()).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            prefix: DEFAULT_PREFIX.to_string(),
            endpoints,
        })
    }

    /// Mount the probe routes under another prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = normalize_prefix(&prefix.into());
        self
    }

    /// Route prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Bound endpoints, in registration order
    pub fn endpoints(&self) -> &[Arc<ProbeEndpoint>] {
        &self.endpoints
    }

    /// Full route path of each probe
    pub fn paths(&self) -> Vec<String> {
        self.endpoints
            .iter()
            .map(|endpoint| format!("{}/{}", self.prefix, endpoint.probe().name()))
            .collect()
    }

    /// Register the routes on an actix service config
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let mut scope = web::scope(&self.prefix);
        for endpoint in &self.endpoints {
            let path = format!("/{}", endpoint.probe().name());
            debug!(
                path = %path,
                summary = %endpoint.probe().endpoint_summary(),
                "Registering probe route"
            );
            let endpoint = Arc::clone(endpoint);
            scope = scope.route(
                &path,
                web::get().to(move || handle_probe(Arc::clone(&endpoint))),
            );
        }
        cfg.service(scope);
    }
}

async fn handle_probe(endpoint: Arc<ProbeEndpoint>) -> Result<HttpResponse> {
    let output = endpoint.call().await?;
    into_http_response(output)
}

/// Convert a probe output into an actix response
pub fn into_http_response(output: ProbeOutput) -> Result<HttpResponse> {
    let status = StatusCode::from_u16(output.status_code)
        .map_err(|_| HealthcheckError::InvalidStatus(output.status_code))?;

    let mut builder = HttpResponse::build(status);
    if let Some(headers) = &output.headers {
        for (name, value) in headers {
            // actix writes content-length itself from the sized body
            if name.eq_ignore_ascii_case(CONTENT_LENGTH.as_str()) {
                continue;
            }
            builder.insert_header((name.as_str(), value.as_str()));
        }
    }

    Ok(builder.body(output.body))
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
