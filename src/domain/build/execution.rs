//! Build execution value objects

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// A project taking part in a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    base_dir: PathBuf,
}

impl Project {
    /// Create a project with an explicit name
    pub fn new(name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Create a project named after its directory
    pub fn from_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let name = base_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| base_dir.display().to_string());

        Self { name, base_dir }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// A failure raised while building
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BuildException {
    message: String,
}

impl BuildException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Summary of one build run.
///
/// The project is absent when the build failed before any project
/// could be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    project: Option<Project>,
    exceptions: Vec<BuildException>,
    duration: Duration,
}

impl ExecutionResult {
    /// Create an empty result (no project, no exceptions)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_exception(mut self, exception: BuildException) -> Self {
        self.exceptions.push(exception);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn exceptions(&self) -> &[BuildException] {
        &self.exceptions
    }

    pub fn has_exceptions(&self) -> bool {
        !self.exceptions.is_empty()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the build succeeded
    pub fn is_success(&self) -> bool {
        !self.has_exceptions()
    }

    /// Whether the build failed before a project was resolved
    pub fn has_failed_without_project(&self) -> bool {
        self.project.is_none() && self.has_exceptions()
    }
}

/// Lifecycle events raised by the build host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    SessionStarted,
    ProjectStarted(Project),
    ProjectSucceeded(Project),
    ProjectFailed(Project),
    /// Final summary of the whole build
    ExecutionResult(ExecutionResult),
    SessionEnded,
}

impl BuildEvent {
    /// Short name used in logs
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SessionStarted => "session-started",
            Self::ProjectStarted(_) => "project-started",
            Self::ProjectSucceeded(_) => "project-succeeded",
            Self::ProjectFailed(_) => "project-failed",
            Self::ExecutionResult(_) => "execution-result",
            Self::SessionEnded => "session-ended",
        }
    }
}
