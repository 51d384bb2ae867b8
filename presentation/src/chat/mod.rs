//! Interactive chat module
//!
//! Provides a line-editor based chat with the backend's agent.

mod repl;

pub use repl::ChatRepl;
