//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::build::{BuildException, ExecutionResult};
use crate::domain::context::ExecutionContext;

use super::message::BuildMessage;

/// Implementation names this backend answers to
const NAMES: &[&str] = &["notify-send", "notifysend"];

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
    /// Program to run, normally `notify-send`
    program: String,
    /// Result of the availability probe done in `init`, for diagnostics only
    available: Option<bool>,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self {
            app_name: "build-notifier".to_string(),
            program: "notify-send".to_string(),
            available: None,
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::new()
        }
    }

    /// Use a different program in place of `notify-send`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Check the program can be started at all.
    ///
    /// Runs `<program> --version`; the exit status does not matter, only
    /// whether the spawn found the program.
    async fn is_tool_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok()
    }

    async fn send(&self, message: BuildMessage) -> Result<(), NotificationError> {
        debug!(title = message.title, program = %self.program, "Running notify-send");

        let status = Command::new(&self.program)
            .args([
                "--app-name",
                &self.app_name,
                "--icon",
                message.icon.icon_name(),
                message.title,
                &message.body,
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    fn name(&self) -> &'static str {
        NAMES[0]
    }

    fn is_candidate_for(&self, implementation: &str) -> bool {
        NAMES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(implementation))
    }

    async fn init(&mut self, _context: &mut ExecutionContext) -> Result<(), NotificationError> {
        let available = self.is_tool_available().await;
        if !available {
            warn!(program = %self.program, "notify-send not found, notifications will fail");
        }
        self.available = Some(available);
        Ok(())
    }

    async fn on_event(&self, result: &ExecutionResult) -> Result<(), NotificationError> {
        self.send(BuildMessage::for_result(result)).await
    }

    async fn on_fail_without_project(
        &self,
        exceptions: &[BuildException],
    ) -> Result<(), NotificationError> {
        self.send(BuildMessage::for_failure_without_project(exceptions))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_to_its_names() {
        let notifier = NotifySendNotifier::new();
        assert_eq!(notifier.name(), "notify-send");
        assert!(notifier.is_candidate_for("notify-send"));
        assert!(notifier.is_candidate_for("NotifySend"));
        assert!(!notifier.is_candidate_for("notify-rust"));
    }

    #[test]
    fn with_app_name_keeps_program() {
        let notifier = NotifySendNotifier::with_app_name("TestApp");
        assert_eq!(notifier.app_name, "TestApp");
        assert_eq!(notifier.program, "notify-send");
        assert_eq!(notifier.available, None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_program_fails_after_init() {
        let mut notifier =
            NotifySendNotifier::new().with_program("build-notifier-missing-notify-send");
        notifier.init(&mut ExecutionContext::new()).await.unwrap();

        assert_eq!(notifier.available, Some(false));
        let err = notifier
            .on_event(&ExecutionResult::new())
            .await
            .unwrap_err();
        assert_eq!(err, NotificationError::NotifySendNotFound);
    }

    #[cfg(unix)]
    fn fake_notify_send(dir: &std::path::Path) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let calls = dir.join("calls");
        let program = dir.join("notify-send");
        std::fs::write(
            &program,
            format!("#!/bin/sh\necho \"$@\" >> '{}'\n", calls.display()),
        )
        .unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        program
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn probe_runs_program_directly() {
        let dir = tempfile::tempdir().unwrap();
        let program = fake_notify_send(dir.path());
        let mut notifier = NotifySendNotifier::new().with_program(program.display().to_string());

        notifier.init(&mut ExecutionContext::new()).await.unwrap();
        assert_eq!(notifier.available, Some(true));

        notifier.on_event(&ExecutionResult::new()).await.unwrap();

        let calls = std::fs::read_to_string(dir.path().join("calls")).unwrap();
        assert!(calls.contains("--version"), "got: {}", calls);
        assert!(calls.contains("Build success"), "got: {}", calls);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failed_probe_does_not_block_sends() {
        let dir = tempfile::tempdir().unwrap();
        let mut notifier = NotifySendNotifier::new()
            .with_program(dir.path().join("notify-send").display().to_string());

        notifier.init(&mut ExecutionContext::new()).await.unwrap();
        assert_eq!(notifier.available, Some(false));

        // The tool shows up after init; sending still goes through.
        fake_notify_send(dir.path());
        notifier
            .on_fail_without_project(&[BuildException::new("boom")])
            .await
            .unwrap();

        let calls = std::fs::read_to_string(dir.path().join("calls")).unwrap();
        assert!(calls.contains("boom"), "got: {}", calls);
    }

    #[tokio::test]
    async fn missing_program_without_init_reports_not_found() {
        let notifier = NotifySendNotifier::new().with_program("build-notifier-missing-notify-send");

        let err = notifier
            .on_fail_without_project(&[BuildException::new("boom")])
            .await
            .unwrap_err();
        assert_eq!(err, NotificationError::NotifySendNotFound);
    }
}
