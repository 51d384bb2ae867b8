//! Chat variant domain.
//!
//! - [`message::Message`] / [`message::Transcript`]: append-only chat history
//! - [`reply::BotReply`]: text extracted from an agent response

pub mod message;
pub mod reply;
