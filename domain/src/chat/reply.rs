//! Agent reply extraction
//!
//! The agent endpoint answers `{result: string | {output?, error?}}`.
//! A structured `error` inside a 2xx payload is not a transport failure:
//! it becomes a bot message framed as an error.

use crate::core::error::DomainError;
use serde_json::{Value, json};

/// Endpoint of the free-form chat agent.
pub const CHAT_ENDPOINT: &str = "/agent/query";

/// Request body carrying one raw user message.
pub fn chat_body(message: &str) -> Value {
    json!({ "message": message })
}

/// Content of a bot reply taken from a success payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotReply {
    Answer(String),
    /// The agent reported an error inside a success response.
    Error(String),
}

impl BotReply {
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        match payload.get("result") {
            Some(Value::String(text)) => Ok(BotReply::Answer(text.clone())),
            Some(Value::Object(result)) => {
                if let Some(Value::String(output)) = result.get("output") {
                    return Ok(BotReply::Answer(output.clone()));
                }
                match result.get("error") {
                    Some(Value::String(error)) => Ok(BotReply::Error(error.clone())),
                    Some(other) if !other.is_null() => Ok(BotReply::Error(other.to_string())),
                    _ => Err(DomainError::MalformedReply(
                        "result has neither output nor error".to_string(),
                    )),
                }
            }
            Some(_) => Err(DomainError::MalformedReply(
                "result is neither text nor an object".to_string(),
            )),
            None => Err(DomainError::MalformedReply("missing result".to_string())),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, BotReply::Error(_))
    }

    /// Text of the bot message to append.
    pub fn into_text(self) -> String {
        match self {
            BotReply::Answer(text) => text,
            BotReply::Error(error) => format!("⚠️ 오류가 발생했습니다: {}", error),
        }
    }
}
