//! Progress notification port
//!
//! Reports the lifetime of the single outstanding backend request so the
//! presentation layer can show a pending indicator.

/// Callback for request progress
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait RequestProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, label: &str);

    /// Called once the request resolved, whatever the outcome
    fn on_request_complete(&self, label: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RequestProgressNotifier for NoProgress {
    fn on_request_start(&self, _label: &str) {}
    fn on_request_complete(&self, _label: &str, _success: bool) {}
}
