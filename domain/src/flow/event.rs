//! Flow events and effects

use crate::core::error::Failure;
use crate::recommend::domain::Domain;
use crate::recommend::request::RecommendRequest;
use serde_json::Value;

/// Identifies one entry into the result step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named transition of the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    /// home → input with an empty answer set for the domain
    Start(Domain),
    /// Set one answer from raw user text (input step)
    Edit { field: String, value: String },
    /// Unset one answer (input step)
    Clear { field: String },
    /// input → home
    Back,
    /// input → result, or retry from result. Requires complete answers.
    Submit { request_id: RequestId },
    /// result → input, keeping the answers
    Revise,
    /// The outcome of the request issued for `request_id`
    Resolved {
        request_id: RequestId,
        response: Result<Value, Failure>,
    },
    /// any → home, resetting everything
    Restart,
}

impl FlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::Start(_) => "start",
            FlowEvent::Edit { .. } => "edit",
            FlowEvent::Clear { .. } => "clear",
            FlowEvent::Back => "go back",
            FlowEvent::Submit { .. } => "submit",
            FlowEvent::Revise => "revise",
            FlowEvent::Resolved { .. } => "resolve",
            FlowEvent::Restart => "restart",
        }
    }
}

/// Work requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEffect {
    None,
    /// Issue exactly one request and feed its outcome back as
    /// [`FlowEvent::Resolved`] with the same id.
    Dispatch {
        request_id: RequestId,
        request: RecommendRequest,
    },
}
