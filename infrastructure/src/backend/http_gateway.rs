//! HTTP gateway to the recommendation backend
//!
//! Every call is a JSON `POST` to `{base_url}{endpoint}`. Only connection
//! setup is bounded here; the per-request timeout is applied by the use
//! cases so that it covers the whole exchange.

use crate::config::FileBackendConfig;
use async_trait::async_trait;
use culturemate_application::{BackendGateway, GatewayError};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

/// Body fields checked, in order, for a backend-provided error detail.
const DETAIL_FIELDS: [&str; 3] = ["detail", "error", "message"];

/// [`BackendGateway`] over HTTP/JSON using reqwest.
pub struct HttpBackendGateway {
    client: Client,
    base_url: String,
}

impl HttpBackendGateway {
    pub fn new(base_url: &str, connect_timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Build from the `[backend]` config section.
    pub fn from_config(config: &FileBackendConfig) -> Result<Self, GatewayError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn decode(response: Response) -> Result<Value, GatewayError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Other(format!("Failed to read response body: {}", e)))?;
        trace!("HTTP {} body: {}", status, text);

        if status.is_success() {
            return serde_json::from_str(&text)
                .map_err(|e| GatewayError::InvalidBody(e.to_string()));
        }

        Err(GatewayError::Status {
            status: status.as_u16(),
            detail: error_detail(&text),
        })
    }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, GatewayError> {
        let url = self.url(endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::Other(e.to_string())
                }
            })?;

        Self::decode(response).await
    }
}

/// First string among the known detail fields of a JSON error body.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    DETAIL_FIELDS
        .iter()
        .find_map(|field| value.get(field).and_then(Value::as_str))
        .map(str::to_string)
}
