//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Animated spinner while a request is in flight; plain text lines when off
    pub show_progress: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}
