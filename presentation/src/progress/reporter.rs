//! Progress reporting while a backend request is in flight

use colored::Colorize;
use culturemate_application::RequestProgressNotifier;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner for the single outstanding request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn pending_message(label: &str) -> &'static str {
        match label {
            "chat" => "답변을 기다리는 중...",
            _ => "추천 결과를 불러오는 중...",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestProgressNotifier for ProgressReporter {
    fn on_request_start(&self, label: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::pending_message(label));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(previous) = spinner.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_request_complete(&self, _label: &str, _success: bool) {
        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RequestProgressNotifier for SimpleProgress {
    fn on_request_start(&self, label: &str) {
        println!("{} {}", "->".cyan(), ProgressReporter::pending_message(label));
    }

    fn on_request_complete(&self, _label: &str, success: bool) {
        if success {
            println!("  {} 완료", "v".green());
        } else {
            println!("  {} 실패", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_message_per_label() {
        assert_eq!(ProgressReporter::pending_message("chat"), "답변을 기다리는 중...");
        assert_eq!(
            ProgressReporter::pending_message("festival"),
            "추천 결과를 불러오는 중..."
        );
    }

    #[test]
    fn test_complete_clears_spinner() {
        let reporter = ProgressReporter::new();
        reporter.on_request_start("tour");
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_request_complete("tour", true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
