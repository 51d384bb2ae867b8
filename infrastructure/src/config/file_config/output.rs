//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// How one-shot results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Colored result cards
    #[default]
    Cards,
    /// Machine-readable JSON
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: FileOutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: FileOutputFormat::Cards,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, FileOutputFormat::Json);
        assert!(config.output.color);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml_str = r#"
[output]
format = "table"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}
