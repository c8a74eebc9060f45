//! Notification text for build outcomes

use std::time::Duration;

use crate::application::ports::NotificationIcon;
use crate::domain::build::{BuildException, ExecutionResult};

/// Title, body and icon of one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMessage {
    pub title: &'static str,
    pub body: String,
    pub icon: NotificationIcon,
}

impl BuildMessage {
    /// Message for a finished build
    pub fn for_result(result: &ExecutionResult) -> Self {
        let project = result
            .project()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| "Build".to_string());
        let elapsed = format_elapsed(result.duration());

        match result.exceptions().first() {
            None => Self {
                title: "Build success",
                body: format!("{} built in {}", project, elapsed),
                icon: NotificationIcon::Success,
            },
            Some(first) => Self {
                title: "Build failure",
                body: format!(
                    "{} failed after {}: {}{}",
                    project,
                    elapsed,
                    first,
                    more_suffix(result.exceptions())
                ),
                icon: NotificationIcon::Failure,
            },
        }
    }

    /// Message for a build that failed before any project was resolved
    pub fn for_failure_without_project(exceptions: &[BuildException]) -> Self {
        let body = match exceptions.first() {
            Some(first) => format!("{}{}", first, more_suffix(exceptions)),
            None => "Build failed before any project was resolved".to_string(),
        };

        Self {
            title: "Build failure",
            body,
            icon: NotificationIcon::Failure,
        }
    }
}

fn more_suffix(exceptions: &[BuildException]) -> String {
    match exceptions.len() {
        0 | 1 => String::new(),
        n => format!(" (+{} more)", n - 1),
    }
}

fn format_elapsed(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build::Project;

    #[test]
    fn success_message() {
        let result = ExecutionResult::new()
            .with_project(Project::new("app", "/app"))
            .with_duration(Duration::from_millis(2500));

        let message = BuildMessage::for_result(&result);
        assert_eq!(message.title, "Build success");
        assert_eq!(message.body, "app built in 2.5s");
        assert_eq!(message.icon, NotificationIcon::Success);
    }

    #[test]
    fn failure_message_counts_extra_exceptions() {
        let result = ExecutionResult::new()
            .with_project(Project::new("app", "/app"))
            .with_exception(BuildException::new("tests failed"))
            .with_exception(BuildException::new("lint failed"))
            .with_duration(Duration::from_secs(125));

        let message = BuildMessage::for_result(&result);
        assert_eq!(message.title, "Build failure");
        assert_eq!(message.body, "app failed after 2m5s: tests failed (+1 more)");
        assert_eq!(message.icon, NotificationIcon::Failure);
    }

    #[test]
    fn failure_without_project_message() {
        let message =
            BuildMessage::for_failure_without_project(&[BuildException::new("no such command")]);
        assert_eq!(message.title, "Build failure");
        assert_eq!(message.body, "no such command");
    }

    #[test]
    fn failure_without_project_and_no_exceptions() {
        let message = BuildMessage::for_failure_without_project(&[]);
        assert!(message.body.contains("before any project"));
    }
}
