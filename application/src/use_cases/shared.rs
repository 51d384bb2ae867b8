//! Helpers shared by the flow and chat use cases.

use crate::ports::backend_gateway::{BackendGateway, GatewayError};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Issue one request bounded by `timeout`.
///
/// On expiry the in-flight future is dropped and the call resolves to
/// [`GatewayError::Timeout`].
pub(crate) async fn post_with_timeout(
    gateway: &dyn BackendGateway,
    endpoint: &str,
    body: &Value,
    timeout: Duration,
) -> Result<Value, GatewayError> {
    debug!("POST {} (timeout {:?})", endpoint, timeout);
    match tokio::time::timeout(timeout, gateway.post_json(endpoint, body)).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Request to {} timed out after {:?}", endpoint, timeout);
            Err(GatewayError::Timeout)
        }
    }
}
