//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::build::{BuildException, ExecutionResult};
use crate::domain::context::ExecutionContext;

/// Notification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to initialize notifier: {0}")]
    InitFailed(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Notification icon types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Success,
    Failure,
}

impl NotificationIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Success => "dialog-ok",
            Self::Failure => "dialog-error",
        }
    }
}

/// Port for a notification backend.
///
/// `init` and `close` are called once each by whoever owns the notifier.
/// The event methods take `&self` and may be called from several tasks.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short name used in logs and listings
    fn name(&self) -> &'static str;

    /// Whether this backend answers to the requested implementation name
    fn is_candidate_for(&self, implementation: &str) -> bool;

    /// Prepare the backend before the first event
    async fn init(&mut self, _context: &mut ExecutionContext) -> Result<(), NotificationError> {
        Ok(())
    }

    /// Report the outcome of a build
    async fn on_event(&self, result: &ExecutionResult) -> Result<(), NotificationError>;

    /// Report a build that failed before any project was resolved
    async fn on_fail_without_project(
        &self,
        exceptions: &[BuildException],
    ) -> Result<(), NotificationError>;

    /// Release backend resources after the last event
    async fn close(&mut self) -> Result<(), NotificationError> {
        Ok(())
    }
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn is_candidate_for(&self, implementation: &str) -> bool {
        self.as_ref().is_candidate_for(implementation)
    }

    async fn init(&mut self, context: &mut ExecutionContext) -> Result<(), NotificationError> {
        self.as_mut().init(context).await
    }

    async fn on_event(&self, result: &ExecutionResult) -> Result<(), NotificationError> {
        self.as_ref().on_event(result).await
    }

    async fn on_fail_without_project(
        &self,
        exceptions: &[BuildException],
    ) -> Result<(), NotificationError> {
        self.as_ref().on_fail_without_project(exceptions).await
    }

    async fn close(&mut self) -> Result<(), NotificationError> {
        self.as_mut().close().await
    }
}
