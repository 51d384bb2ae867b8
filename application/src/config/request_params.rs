//! Request parameters: timeouts applied around each backend call.

use std::time::Duration;

/// Default timeout of a single backend request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeouts for the two use cases.
///
/// Each request gets exactly one attempt bounded by its timeout; there is no
/// retry or backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParams {
    /// Timeout of a recommendation request issued on entering the result step.
    pub recommend_timeout: Duration,
    /// Timeout of one chat turn.
    pub chat_timeout: Duration,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            recommend_timeout: DEFAULT_REQUEST_TIMEOUT,
            chat_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl RequestParams {
    pub fn with_recommend_timeout(mut self, timeout: Duration) -> Self {
        self.recommend_timeout = timeout;
        self
    }

    pub fn with_chat_timeout(mut self, timeout: Duration) -> Self {
        self.chat_timeout = timeout;
        self
    }

    /// Build from second counts as found in config files.
    pub fn from_secs(recommend_secs: u64, chat_secs: u64) -> Self {
        Self {
            recommend_timeout: Duration::from_secs(recommend_secs),
            chat_timeout: Duration::from_secs(chat_secs),
        }
    }
}
