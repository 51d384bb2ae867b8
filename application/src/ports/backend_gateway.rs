//! Backend Gateway port
//!
//! Defines the interface for calling the recommendation backend.

use async_trait::async_trait;
use culturemate_domain::{ErrorKind, Failure};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during backend gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Backend returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::ConnectionError(_) => ErrorKind::TransportUnreachable,
            GatewayError::Timeout => ErrorKind::TransportTimeout,
            GatewayError::Status { .. } | GatewayError::Other(_) => ErrorKind::BackendError,
            GatewayError::InvalidBody(_) => ErrorKind::MalformedResponse,
        }
    }

    /// What the user sees for this error.
    ///
    /// A backend-provided detail is shown verbatim; everything else gets the
    /// generic text of its kind.
    pub fn to_failure(&self) -> Failure {
        match self {
            GatewayError::Status {
                detail: Some(detail),
                ..
            } => Failure::new(ErrorKind::BackendError, detail.clone()),
            GatewayError::Status {
                status,
                detail: None,
            } => Failure::new(
                ErrorKind::BackendError,
                format!("서버 오류가 발생했습니다 (HTTP {})", status),
            ),
            other => Failure::from_kind(other.kind()),
        }
    }
}

/// Gateway to the recommendation backend
///
/// This port defines how the application layer talks to the HTTP backend.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// POST `body` as JSON to `endpoint` and return the decoded body of a
    /// 2xx response. Non-2xx statuses are errors.
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, GatewayError>;
}
