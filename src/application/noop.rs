//! No-op notifier

use async_trait::async_trait;

use crate::domain::build::{BuildException, ExecutionResult};

use super::ports::{NotificationError, Notifier};

/// No-op notifier that does nothing
///
/// Used when no registered backend matches the configured implementation.
/// It never claims a name, so it is only reached as the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl NoOpNotifier {
    /// Create a new no-op notifier
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for NoOpNotifier {
    fn name(&self) -> &'static str {
        "none"
    }

    fn is_candidate_for(&self, _implementation: &str) -> bool {
        false
    }

    async fn on_event(&self, _result: &ExecutionResult) -> Result<(), NotificationError> {
        Ok(())
    }

    async fn on_fail_without_project(
        &self,
        _exceptions: &[BuildException],
    ) -> Result<(), NotificationError> {
        Ok(())
    }
}
