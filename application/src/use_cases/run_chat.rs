//! Run Chat use case
//!
//! Each user message produces exactly one request to the agent endpoint and
//! exactly one bot message, whatever the outcome.

use crate::config::RequestParams;
use crate::ports::backend_gateway::BackendGateway;
use crate::ports::progress::RequestProgressNotifier;
use crate::use_cases::shared::post_with_timeout;
use culturemate_domain::{
    BotReply, CHAT_ENDPOINT, ErrorKind, Failure, Message, Transcript, chat_body,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

const PROGRESS_LABEL: &str = "chat";

/// Owns the transcript of one chat session.
pub struct ChatController {
    gateway: Arc<dyn BackendGateway>,
    params: RequestParams,
    transcript: Transcript,
}

impl ChatController {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self {
            gateway,
            params: RequestParams::default(),
            transcript: Transcript::default(),
        }
    }

    pub fn with_params(mut self, params: RequestParams) -> Self {
        self.params = params;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Send one message and append the bot's reply.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user message
    /// and one bot message are appended, and the bot message is returned.
    /// Taking `&mut self` across the request keeps a second send from
    /// starting before this one resolves.
    pub async fn send(
        &mut self,
        text: &str,
        progress: &dyn RequestProgressNotifier,
    ) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank chat message");
            return None;
        }

        self.transcript.push(Message::user(text));
        info!("Sending chat message ({} chars)", text.chars().count());
        progress.on_request_start(PROGRESS_LABEL);

        let result = post_with_timeout(
            self.gateway.as_ref(),
            CHAT_ENDPOINT,
            &chat_body(text),
            self.params.chat_timeout,
        )
        .await;

        let (reply_text, success) = match result {
            Ok(payload) => match BotReply::from_payload(&payload) {
                Ok(reply) => {
                    if let BotReply::Error(e) = &reply {
                        warn!("Agent reported an error: {}", e);
                    }
                    let success = !reply.is_error();
                    (reply.into_text(), success)
                }
                Err(e) => {
                    warn!("Unreadable agent reply: {}", e);
                    (Failure::from_kind(ErrorKind::MalformedResponse).message, false)
                }
            },
            Err(e) => {
                warn!("Chat request failed: {}", e);
                (e.to_failure().message, false)
            }
        };

        progress.on_request_complete(PROGRESS_LABEL, success);
        Some(self.transcript.push(Message::bot(reply_text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::backend_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::testing::{RecordingProgress, ScriptedGateway};
    use culturemate_domain::Role;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_answer_appends_one_bot_message() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(json!({"result": "안녕하세요"}))]));
        let mut chat = ChatController::new(gateway.clone());

        let progress = RecordingProgress::default();
        let reply = chat.send("안녕", &progress).await.unwrap();
        assert_eq!(reply.role, Role::Bot);
        assert_eq!(reply.text, "안녕하세요");

        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(chat.transcript().messages()[0].role, Role::User);
        assert_eq!(gateway.calls()[0], ("/agent/query".to_string(), json!({"message": "안녕"})));
        assert_eq!(
            progress.events(),
            vec!["start:chat".to_string(), "complete:chat:true".to_string()]
        );
    }

    #[tokio::test]
    async fn test_blank_message_sends_nothing() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let mut chat = ChatController::new(gateway.clone());

        assert!(chat.send("   ", &NoProgress).await.is_none());
        assert!(chat.transcript().is_empty());
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_structured_error_folds_into_message() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(
            json!({"result": {"error": "tool failed"}}),
        )]));
        let mut chat = ChatController::new(gateway);

        let reply = chat.send("축제 알려줘", &NoProgress).await.unwrap();
        assert!(reply.text.contains("tool failed"));
        assert_eq!(chat.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_failure_still_yields_bot_message() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(
            GatewayError::ConnectionError("refused".to_string()),
        )]));
        let mut chat = ChatController::new(gateway);

        let progress = RecordingProgress::default();
        let reply = chat.send("안녕", &progress).await.unwrap();
        assert_eq!(
            reply.text,
            ErrorKind::TransportUnreachable.user_message()
        );
        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(progress.events()[1], "complete:chat:false");
    }

    #[tokio::test]
    async fn test_timeout_yields_bot_message() {
        let gateway = Arc::new(
            ScriptedGateway::new(vec![Ok(json!({"result": "late"}))])
                .with_delay(Duration::from_millis(500)),
        );
        let mut chat = ChatController::new(gateway)
            .with_params(RequestParams::default().with_chat_timeout(Duration::from_millis(20)));

        let progress = RecordingProgress::default();
        let reply = chat.send("안녕", &progress).await.unwrap();
        assert_eq!(reply.text, ErrorKind::TransportTimeout.user_message());
        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(
            progress.events(),
            vec!["start:chat".to_string(), "complete:chat:false".to_string()]
        );
    }

    #[tokio::test]
    async fn test_malformed_reply() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(json!({"unexpected": 1}))]));
        let mut chat = ChatController::new(gateway);

        let reply = chat.send("안녕", &NoProgress).await.unwrap();
        assert_eq!(reply.text, ErrorKind::MalformedResponse.user_message());
    }

    #[tokio::test]
    async fn test_transcript_keeps_order_across_turns() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(json!({"result": "첫 번째"})),
            Ok(json!({"result": "두 번째"})),
        ]));
        let mut chat = ChatController::new(gateway);

        chat.send("하나", &NoProgress).await;
        chat.send("둘", &NoProgress).await;

        let texts: Vec<_> = chat
            .transcript()
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["하나", "첫 번째", "둘", "두 번째"]);
    }
}
