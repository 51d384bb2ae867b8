//! Backend configuration from TOML (`[backend]` section)

use culturemate_application::RequestParams;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Scheme, host and port every endpoint path is joined onto
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub recommend_timeout_secs: u64,
    pub chat_timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 5,
            recommend_timeout_secs: 30,
            chat_timeout_secs: 30,
        }
    }
}

impl FileBackendConfig {
    /// Per-request timeouts for the use cases.
    pub fn request_params(&self) -> RequestParams {
        RequestParams::from_secs(self.recommend_timeout_secs, self.chat_timeout_secs)
    }
}
