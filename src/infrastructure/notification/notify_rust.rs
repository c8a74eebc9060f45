//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::build::{BuildException, ExecutionResult};

use super::message::BuildMessage;

/// Implementation names this backend answers to
const NAMES: &[&str] = &["notify-rust", "desktop"];

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: "build-notifier".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    async fn show(&self, message: BuildMessage) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        debug!(title = message.title, "Showing desktop notification");

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(message.title)
                .body(&message.body)
                .icon(message.icon.icon_name())
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    fn name(&self) -> &'static str {
        NAMES[0]
    }

    fn is_candidate_for(&self, implementation: &str) -> bool {
        NAMES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(implementation))
    }

    async fn on_event(&self, result: &ExecutionResult) -> Result<(), NotificationError> {
        self.show(BuildMessage::for_result(result)).await
    }

    async fn on_fail_without_project(
        &self,
        exceptions: &[BuildException],
    ) -> Result<(), NotificationError> {
        self.show(BuildMessage::for_failure_without_project(exceptions))
            .await
    }
}
