//! Presentation layer for culturemate
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters, the interactive recommendation wizard and the chat REPL.

pub mod chat;
pub mod cli;
pub mod flow;
pub mod input;
pub mod output;
pub mod progress;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use flow::{FlowWizard, OneShotReport, parse_domain, run_one_shot};
pub use input::{Input, LineSource, ReedlineInput};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
