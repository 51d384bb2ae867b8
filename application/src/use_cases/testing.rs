//! Test doubles for the use case tests.

use crate::ports::backend_gateway::{BackendGateway, GatewayError};
use crate::ports::progress::RequestProgressNotifier;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Gateway that replays scripted responses and records every call.
pub(crate) struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<Value, GatewayError>>>,
    calls: Mutex<Vec<(String, Value)>>,
    delay: Option<Duration>,
}

impl ScriptedGateway {
    pub(crate) fn new(responses: Vec<Result<Value, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Sleep this long before answering each call.
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendGateway for ScriptedGateway {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), body.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
    }
}

/// Progress notifier that records start/complete events.
#[derive(Default)]
pub(crate) struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl RequestProgressNotifier for RecordingProgress {
    fn on_request_start(&self, label: &str) {
        self.events.lock().unwrap().push(format!("start:{}", label));
    }

    fn on_request_complete(&self, label: &str, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete:{}:{}", label, success));
    }
}
