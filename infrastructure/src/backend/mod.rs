//! Backend adapters
//!
//! HTTP implementation of the [`culturemate_application::BackendGateway`] port.

pub mod http_gateway;

pub use http_gateway::HttpBackendGateway;
