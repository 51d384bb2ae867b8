//! Infrastructure layer for culturemate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;

// Re-export commonly used types
pub use backend::HttpBackendGateway;
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
