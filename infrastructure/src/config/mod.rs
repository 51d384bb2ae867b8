//! Configuration file loading for culturemate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CULTUREMATE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./culturemate.toml` or `./.culturemate.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/culturemate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig,
};
pub use loader::ConfigLoader;
