//! Health check that performs an HTTP GET

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;

use super::types::{BoxError, CheckError, DEFAULT_HC_TIMEOUT, HealthCheck};
use crate::models::HealthCheckResult;

const MAX_REDIRECTS: usize = 10;

/// Health check that requests a URL and inspects the status code
///
/// A 2xx response is healthy. Server errors, and 401/403 when credentials
/// are configured, are failures carrying the status in `error_details`.
/// Any other status is unhealthy without details.
#[derive(Debug, Clone)]
pub struct UrlHealthCheck {
    url: String,
    username: Option<String>,
    password: Option<String>,
    verify_ssl: bool,
    follow_redirects: bool,
    timeout: Duration,
    name: String,
}

impl UrlHealthCheck {
    /// Create a check for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            verify_ssl: true,
            follow_redirects: true,
            timeout: DEFAULT_HC_TIMEOUT,
            name: "HTTP".to_string(),
        }
    }

    /// Authenticate with HTTP basic auth
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: Option<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = password;
        self
    }

    /// Set whether TLS certificates are verified
    pub fn verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    /// Set whether redirects are followed
    pub fn follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.follow_redirects = follow_redirects;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the name reported in results
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Target URL
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<bool, BoxError> {
        let redirect = if self.follow_redirects {
            Policy::limited(MAX_REDIRECTS)
        } else {
            Policy::none()
        };

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(!self.verify_ssl)
            .redirect(redirect)
            .build()?;

        let mut request = client.get(&self.url);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, Some(self.password.clone().unwrap_or_default()));
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(url = %self.url, status = %status, "URL health check response");

        let rejected_credentials = self.username.is_some()
            && matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN);
        if status.is_server_error() || rejected_credentials {
            return Err(format!("HTTP status {} for url {}", status, self.url).into());
        }

        Ok(status.is_success())
    }
}

#[async_trait]
impl HealthCheck for UrlHealthCheck {
    fn name(&self) -> &str {
        &self.name
    }

    async fn check(&self) -> Result<HealthCheckResult, CheckError> {
        match self.request().await {
            Ok(healthy) => Ok(HealthCheckResult {
                name: self.name.clone(),
                healthy,
                error_details: None,
            }),
            Err(e) => Ok(HealthCheckResult::from_error(&self.name, e.as_ref())),
        }
    }
}
