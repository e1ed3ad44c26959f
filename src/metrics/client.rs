// Remote metrics API HTTP client.
// Handles bearer authentication, request timeouts, and response status checks.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;
use tracing::debug;

use crate::error::{DashError, Result};

/// Default request timeout: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the athlete metrics endpoint.
///
/// Cloning is cheap and shares the underlying connection pool, so the refresh
/// job and the cached accessor can each own one.
#[derive(Debug, Clone)]
pub struct MetricsClient {
    client: Client,
    endpoint: String,
}

impl MetricsClient {
    /// Create a new client for `endpoint`, authenticating with `token`.
    pub fn new(endpoint: impl Into<String>, token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| DashError::Config(format!("invalid API key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("tridash"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(DashError::Api)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the athlete metrics document.
    pub async fn fetch(&self) -> Result<Value> {
        let response = self.client.get(&self.endpoint).send().await?;
        let response = check_response(response)?;

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "metrics response received");
        let document = serde_json::from_slice(&body)?;
        Ok(document)
    }
}

/// Only a plain 200 counts as success for this endpoint.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        status => Err(DashError::Status(status.as_u16())),
    }
}
