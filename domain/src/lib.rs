//! Domain layer for culturemate
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Recommendation domains
//!
//! Three domains (exhibition, festival, tour) each declare an answer schema,
//! an endpoint, a request body shape and a response normalizer in one
//! registry entry. See [`recommend::registry`].
//!
//! ## Flow
//!
//! A recommendation session walks `home → input → result`. The whole session
//! lives in one [`FlowState`] value that changes only through
//! [`FlowState::apply`].
//!
//! ## Chat
//!
//! The chat variant keeps an append-only [`Transcript`] and turns each agent
//! response into exactly one bot [`Message`].

pub mod chat;
pub mod core;
pub mod flow;
pub mod recommend;

// Re-export commonly used types
pub use chat::{
    message::{Message, Role, Transcript},
    reply::{BotReply, CHAT_ENDPOINT, chat_body},
};
pub use core::error::{DomainError, ErrorKind, Failure};
pub use flow::{
    error::FlowError,
    event::{FlowEffect, FlowEvent, RequestId},
    state::{FlowState, Outcome, Step},
};
pub use recommend::{
    answers::{AnswerSet, AnswerValue},
    card::ResultCard,
    domain::Domain,
    normalize::normalize,
    registry::{DomainSpec, spec},
    request::{RecommendRequest, build as build_request},
    schema::{ChoiceOption, FieldKind, FieldSpec},
};
