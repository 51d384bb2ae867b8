//! Flow transition errors

use super::event::RequestId;
use super::state::Step;
use crate::core::error::{DomainError, ErrorKind};
use crate::recommend::domain::Domain;
use thiserror::Error;

/// A transition the flow refused to apply. The state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Cannot {event} on the {step} step")]
    InvalidTransition { step: Step, event: &'static str },

    #[error("{domain} answers are incomplete: missing {}", .missing.join(", "))]
    Incomplete {
        domain: Domain,
        missing: Vec<&'static str>,
    },

    #[error("A request is already in flight")]
    RequestInFlight,

    #[error("Ignoring response for request {0}, which is no longer pending")]
    StaleResponse(RequestId),

    #[error(transparent)]
    Answer(#[from] DomainError),
}

impl FlowError {
    /// Category for errors that should be shown to the user.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            FlowError::Incomplete { .. } => Some(ErrorKind::ValidationIncomplete),
            FlowError::Answer(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Whether this error only signals an event that was dropped.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, FlowError::RequestInFlight | FlowError::StaleResponse(_))
    }
}
