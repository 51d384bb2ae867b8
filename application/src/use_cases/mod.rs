//! Use cases
//!
//! - [`run_flow::FlowController`]: the home → input → result recommendation flow
//! - [`run_chat::ChatController`]: one request/response pair per chat message

pub mod run_chat;
pub mod run_flow;
mod shared;

#[cfg(test)]
pub(crate) mod testing;
