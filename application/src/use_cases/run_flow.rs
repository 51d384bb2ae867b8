//! Run Flow use case
//!
//! Drives one recommendation session through `home → input → result`.
//! Every state change goes through [`FlowState::apply`]; this controller
//! only allocates request ids and performs the effects the state asks for.

use crate::config::RequestParams;
use crate::ports::backend_gateway::BackendGateway;
use crate::ports::progress::RequestProgressNotifier;
use crate::use_cases::shared::post_with_timeout;
use culturemate_domain::{
    Domain, FlowEffect, FlowError, FlowEvent, FlowState, Outcome, RequestId,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns the flow state of one session and talks to the backend for it.
pub struct FlowController {
    gateway: Arc<dyn BackendGateway>,
    params: RequestParams,
    state: FlowState,
    next_request: u64,
}

impl FlowController {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self {
            gateway,
            params: RequestParams::default(),
            state: FlowState::new(),
            next_request: 0,
        }
    }

    pub fn with_params(mut self, params: RequestParams) -> Self {
        self.params = params;
        self
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Pick a domain on the home step.
    pub fn start(&mut self, domain: Domain) -> Result<(), FlowError> {
        self.apply(FlowEvent::Start(domain))
    }

    /// Set one answer from raw text.
    pub fn edit(&mut self, field: &str, value: &str) -> Result<(), FlowError> {
        self.apply(FlowEvent::Edit {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    pub fn clear(&mut self, field: &str) -> Result<(), FlowError> {
        self.apply(FlowEvent::Clear {
            field: field.to_string(),
        })
    }

    pub fn back(&mut self) -> Result<(), FlowError> {
        self.apply(FlowEvent::Back)
    }

    /// Return from the result step to the input step, keeping the answers.
    pub fn revise(&mut self) -> Result<(), FlowError> {
        self.apply(FlowEvent::Revise)
    }

    /// Discard everything and go back home.
    pub fn restart(&mut self) {
        self.state.restart();
        debug!("Flow: restart -> {}", self.state.step());
    }

    /// Submit the current answers and wait for the backend.
    ///
    /// Issues at most one request. When the answers are incomplete or a
    /// request is already loading, the error is returned and nothing is sent.
    /// Transport and backend failures are not errors here: they land in the
    /// state as [`culturemate_domain::Outcome::Failed`].
    pub async fn submit(&mut self, progress: &dyn RequestProgressNotifier) -> Result<(), FlowError> {
        let request_id = self.allocate_request_id();
        let effect = self.state.apply(FlowEvent::Submit { request_id })?;
        let FlowEffect::Dispatch {
            request_id,
            request,
        } = effect
        else {
            return Ok(());
        };

        let label = self
            .state
            .domain()
            .map(|domain| domain.as_str())
            .unwrap_or("request");
        info!("Submitting {} request {}", label, request_id);
        progress.on_request_start(label);

        let response = post_with_timeout(
            self.gateway.as_ref(),
            request.endpoint,
            &request.body,
            self.params.recommend_timeout,
        )
        .await
        .map_err(|e| {
            warn!("Request {} failed: {}", request_id, e);
            e.to_failure()
        });

        match self.apply(FlowEvent::Resolved {
            request_id,
            response,
        }) {
            Ok(()) => {}
            Err(e) if e.is_ignorable() => debug!("Dropped response: {}", e),
            Err(e) => return Err(e),
        }

        let success = match self.state.outcome() {
            Outcome::Ready(cards) => {
                info!("Request {} returned {} result(s)", request_id, cards.len());
                true
            }
            Outcome::Failed(failure) => {
                info!("Request {} failed: {}", request_id, failure.kind);
                false
            }
            _ => false,
        };
        progress.on_request_complete(label, success);
        Ok(())
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    fn apply(&mut self, event: FlowEvent) -> Result<(), FlowError> {
        let name = event.name();
        match self.state.apply(event) {
            Ok(_) => {
                debug!("Flow: {} -> {}", name, self.state.step());
                Ok(())
            }
            Err(e) => {
                debug!("Flow rejected {}: {}", name, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::backend_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::{RecordingProgress, ScriptedGateway};
    use culturemate_domain::{ErrorKind, Step};
    use serde_json::json;
    use std::time::Duration;

    fn controller(gateway: Arc<ScriptedGateway>) -> FlowController {
        FlowController::new(gateway)
    }

    fn fill_tour(controller: &mut FlowController) {
        controller.start(Domain::Tour).unwrap();
        controller.edit("query", "바다").unwrap();
        controller.edit("topK", "3").unwrap();
    }

    #[tokio::test]
    async fn test_submit_success_shows_cards() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(json!([
            {"title": "해운대", "address": "부산", "description": "바다"}
        ]))]));
        let mut controller = controller(gateway.clone());
        fill_tour(&mut controller);

        let progress = RecordingProgress::default();
        controller.submit(&progress).await.unwrap();

        assert_eq!(controller.state().step(), Step::Result);
        let cards = controller.state().results().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "해운대");

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/search/tour");
        assert_eq!(calls[0].1, json!({"query": "바다", "top_k": 3}));
        assert_eq!(
            progress.events(),
            vec!["start:tour".to_string(), "complete:tour:true".to_string()]
        );
    }

    #[tokio::test]
    async fn test_incomplete_submit_sends_nothing() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let mut controller = controller(gateway.clone());
        controller.start(Domain::Festival).unwrap();
        controller.edit("region", "서울").unwrap();

        let err = controller.submit(&NoProgress).await.unwrap_err();
        assert!(matches!(err, FlowError::Incomplete { .. }));
        assert_eq!(controller.state().step(), Step::Input);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_error_detail_is_shown() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::Status {
            status: 500,
            detail: Some("DB down".to_string()),
        })]));
        let mut controller = controller(gateway);
        fill_tour(&mut controller);

        let progress = RecordingProgress::default();
        controller.submit(&progress).await.unwrap();

        let failure = controller.state().error().unwrap();
        assert_eq!(failure.kind, ErrorKind::BackendError);
        assert_eq!(failure.message, "DB down");
        assert!(controller.state().results().is_none());
        assert_eq!(progress.events()[1], "complete:tour:false");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(
            GatewayError::ConnectionError("refused".to_string()),
        )]));
        let mut controller = controller(gateway);
        fill_tour(&mut controller);
        controller.submit(&NoProgress).await.unwrap();

        assert_eq!(
            controller.state().error().unwrap().kind,
            ErrorKind::TransportUnreachable
        );
    }

    #[tokio::test]
    async fn test_malformed_payload_becomes_failure() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(json!({"oops": true}))]));
        let mut controller = controller(gateway);
        fill_tour(&mut controller);
        controller.submit(&NoProgress).await.unwrap();

        assert_eq!(
            controller.state().error().unwrap().kind,
            ErrorKind::MalformedResponse
        );
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let gateway = Arc::new(
            ScriptedGateway::new(vec![Ok(json!([]))]).with_delay(Duration::from_millis(500)),
        );
        let mut controller = controller(gateway)
            .with_params(RequestParams::default().with_recommend_timeout(Duration::from_millis(20)));
        fill_tour(&mut controller);
        controller.submit(&NoProgress).await.unwrap();

        assert_eq!(
            controller.state().error().unwrap().kind,
            ErrorKind::TransportTimeout
        );
    }

    #[tokio::test]
    async fn test_retry_from_result_issues_new_request() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::Timeout),
            Ok(json!([])),
        ]));
        let mut controller = controller(gateway.clone());
        fill_tour(&mut controller);

        controller.submit(&NoProgress).await.unwrap();
        assert!(controller.state().error().is_some());

        controller.submit(&NoProgress).await.unwrap();
        assert_eq!(controller.state().outcome(), &Outcome::Ready(vec![]));
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_revise_then_resubmit_with_changed_answers() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(json!([])), Ok(json!([]))]));
        let mut controller = controller(gateway.clone());
        fill_tour(&mut controller);
        controller.submit(&NoProgress).await.unwrap();

        controller.revise().unwrap();
        assert_eq!(controller.state().step(), Step::Input);
        controller.edit("topK", "7").unwrap();
        controller.submit(&NoProgress).await.unwrap();

        let calls = gateway.calls();
        assert_eq!(calls[1].1["top_k"], json!(7));
    }

    #[tokio::test]
    async fn test_restart_resets_to_fresh_state() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(json!([]))]));
        let mut controller = controller(gateway);
        fill_tour(&mut controller);
        controller.submit(&NoProgress).await.unwrap();

        controller.restart();
        assert_eq!(controller.state(), &FlowState::new());
    }

    #[test]
    fn test_edit_outside_input_is_rejected() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let mut controller = controller(gateway);
        let err = controller.edit("query", "바다").unwrap_err();
        assert!(matches!(err, FlowError::InvalidTransition { .. }));
    }
}
