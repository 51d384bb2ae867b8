//! Application layer for culturemate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RequestParams;
pub use ports::{
    backend_gateway::{BackendGateway, GatewayError},
    progress::{NoProgress, RequestProgressNotifier},
};
pub use use_cases::{run_chat::ChatController, run_flow::FlowController};
