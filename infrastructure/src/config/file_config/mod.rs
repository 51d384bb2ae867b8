//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section falls back to its defaults.

mod backend;
mod output;
mod repl;

pub use backend::{DEFAULT_BASE_URL, FileBackendConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("backend.base_url must start with http:// or https:// (got '{0}')")]
    UnsupportedScheme(String),

    #[error("backend.{0} cannot be 0")]
    ZeroTimeout(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend location and timeouts
    pub backend: FileBackendConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected problems.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let base_url = self.backend.base_url.trim();
        if base_url.is_empty() {
            errors.push(ConfigValidationError::EmptyBaseUrl);
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(ConfigValidationError::UnsupportedScheme(base_url.to_string()));
        }

        for (name, secs) in [
            ("connect_timeout_secs", self.backend.connect_timeout_secs),
            ("recommend_timeout_secs", self.backend.recommend_timeout_secs),
            ("chat_timeout_secs", self.backend.chat_timeout_secs),
        ] {
            if secs == 0 {
                errors.push(ConfigValidationError::ZeroTimeout(name));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
base_url = "https://api.example.com"
connect_timeout_secs = 3
recommend_timeout_secs = 20
chat_timeout_secs = 60

[output]
format = "json"
color = false

[repl]
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.backend.connect_timeout_secs, 3);
        assert_eq!(config.backend.recommend_timeout_secs, 20);
        assert_eq!(config.backend.chat_timeout_secs, 60);
        assert_eq!(config.output.format, FileOutputFormat::Json);
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[backend]
base_url = "http://10.0.0.5:9000"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "http://10.0.0.5:9000");
        // Defaults should apply
        assert_eq!(config.backend.recommend_timeout_secs, 30);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.backend.connect_timeout_secs, 5);
        assert_eq!(config.output.format, FileOutputFormat::Cards);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let mut config = FileConfig::default();
        config.backend.base_url = "ftp://example.com".to_string();
        config.backend.chat_timeout_secs = 0;

        let errors = config.validate();
        assert_eq!(
            errors,
            vec![
                ConfigValidationError::UnsupportedScheme("ftp://example.com".to_string()),
                ConfigValidationError::ZeroTimeout("chat_timeout_secs"),
            ]
        );
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = FileConfig::default();
        config.backend.base_url = "  ".to_string();
        assert_eq!(config.validate(), vec![ConfigValidationError::EmptyBaseUrl]);
    }
}
