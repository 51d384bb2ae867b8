//! Test doubles shared by the presentation tests.

use async_trait::async_trait;
use culturemate_application::{BackendGateway, GatewayError};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway returning canned responses in order.
pub(crate) struct StubGateway {
    responses: Mutex<VecDeque<Result<Value, GatewayError>>>,
    endpoints: Mutex<Vec<String>>,
}

impl StubGateway {
    pub(crate) fn new(responses: Vec<Result<Value, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            endpoints: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn endpoints(&self) -> Vec<String> {
        self.endpoints.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendGateway for StubGateway {
    async fn post_json(&self, endpoint: &str, _body: &Value) -> Result<Value, GatewayError> {
        self.endpoints.lock().unwrap().push(endpoint.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}
