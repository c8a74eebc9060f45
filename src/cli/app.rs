//! Build runner for the `run` command
//!
//! Plays the role of the build host: it owns the dispatcher, raises
//! lifecycle events around the build command and always closes the
//! dispatcher at the end.

use std::env;
use std::process::{ExitCode, ExitStatus, Stdio};
use std::time::Instant;

use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::application::ports::{ConfigurationParser, SkipSwitch};
use crate::application::{DispatchError, NotificationDispatcher};
use crate::domain::build::{BuildEvent, BuildException, ExecutionResult, Project};
use crate::domain::context::ExecutionContext;
use crate::infrastructure::{available_notifiers, EnvSkipSwitch, XdgConfigurationParser};

use super::args::RunOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
pub const EXIT_INTERRUPTED: u8 = 130;

/// Errors from running a build
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to set up notifications: {0}")]
    Init(#[source] DispatchError),

    #[error("Failed to setup signal handler: {0}")]
    Signal(#[from] std::io::Error),
}

/// Outcome of the build command
#[derive(Debug)]
pub struct BuildOutcome {
    pub result: ExecutionResult,
    pub exit_code: u8,
}

/// Run the build command with notifications
pub async fn run_build(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();

    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup().await {
        presenter.error(&RunError::from(e).to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    let parser = XdgConfigurationParser::new().with_override(options.implementation.clone());
    let dispatcher = NotificationDispatcher::new(parser, available_notifiers(), EnvSkipSwitch::new());

    match run_with_dispatcher(dispatcher, &options, &shutdown, &presenter).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Drive one build through the dispatcher lifecycle.
///
/// The dispatcher is closed whether the build succeeds, fails, is
/// interrupted or notifications could not be set up.
pub async fn run_with_dispatcher<P, S>(
    mut dispatcher: NotificationDispatcher<P, S>,
    options: &RunOptions,
    shutdown: &ShutdownSignal,
    presenter: &Presenter,
) -> Result<u8, RunError>
where
    P: ConfigurationParser,
    S: SkipSwitch,
{
    let mut context = ExecutionContext::new();
    let outcome = match dispatcher.init(&mut context).await {
        Ok(()) => {
            if let Some(name) = dispatcher.active_notifier() {
                debug!(notifier = name, "Notifier ready");
            }
            Ok(drive_build(&dispatcher, options, shutdown, presenter).await)
        }
        Err(e) => Err(RunError::Init(e)),
    };

    if let Err(e) = dispatcher.close().await {
        presenter.warn(&format!("Failed to close notifier: {}", e));
    }

    outcome
}

async fn drive_build<P, S>(
    dispatcher: &NotificationDispatcher<P, S>,
    options: &RunOptions,
    shutdown: &ShutdownSignal,
    presenter: &Presenter,
) -> u8
where
    P: ConfigurationParser,
    S: SkipSwitch,
{
    raise(dispatcher, &BuildEvent::SessionStarted, presenter).await;

    let outcome = execute(options, shutdown).await;
    if let Some(project) = outcome.result.project() {
        let event = if outcome.result.is_success() {
            BuildEvent::ProjectSucceeded(project.clone())
        } else {
            BuildEvent::ProjectFailed(project.clone())
        };
        raise(dispatcher, &event, presenter).await;
    }

    for exception in outcome.result.exceptions() {
        presenter.error(exception.message());
    }

    raise(dispatcher, &BuildEvent::ExecutionResult(outcome.result), presenter).await;
    raise(dispatcher, &BuildEvent::SessionEnded, presenter).await;

    outcome.exit_code
}

async fn raise<P, S>(
    dispatcher: &NotificationDispatcher<P, S>,
    event: &BuildEvent,
    presenter: &Presenter,
) where
    P: ConfigurationParser,
    S: SkipSwitch,
{
    if let Err(e) = dispatcher.on_event(event).await {
        presenter.warn(&format!("Notification failed: {}", e));
    }
}

/// Run the build command and summarize it as an execution result
pub async fn execute(options: &RunOptions, shutdown: &ShutdownSignal) -> BuildOutcome {
    let started = Instant::now();
    let project = env::current_dir().ok().map(Project::from_dir);

    match &project {
        Some(project) => info!(
            command = %options.display_command(),
            project = project.name(),
            dir = %project.base_dir().display(),
            "Starting build"
        ),
        None => info!(command = %options.display_command(), "Starting build"),
    }

    let mut child = match Command::new(&options.program)
        .args(&options.args)
        .stdin(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // Nothing ran, so there is no project to report on.
            let result = ExecutionResult::new()
                .with_exception(BuildException::new(format!(
                    "Failed to start '{}': {}",
                    options.program, e
                )))
                .with_duration(started.elapsed());
            return BuildOutcome {
                result,
                exit_code: EXIT_ERROR,
            };
        }
    };

    let status = tokio::select! {
        status = child.wait() => status,
        _ = shutdown.wait() => {
            debug!("Interrupting build");
            interrupt(&mut child);
            child.wait().await
        }
    };

    let mut result = ExecutionResult::new();
    if let Some(project) = project {
        result = result.with_project(project);
    }

    let exit_code = match status {
        Ok(status) if status.success() => EXIT_SUCCESS,
        Ok(status) => {
            result = result.with_exception(BuildException::new(failure_message(
                options,
                status,
                shutdown.is_shutdown(),
            )));
            exit_code_for(status, shutdown.is_shutdown())
        }
        Err(e) => {
            result = result.with_exception(BuildException::new(format!(
                "Failed to wait for '{}': {}",
                options.program, e
            )));
            EXIT_ERROR
        }
    };

    BuildOutcome {
        result: result.with_duration(started.elapsed()),
        exit_code,
    }
}

/// Ask the build to stop, SIGTERM where available
fn interrupt(child: &mut Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        if let Some(id) = child.id() {
            if kill(Pid::from_raw(id as i32), Signal::SIGTERM).is_ok() {
                return;
            }
        }
    }

    let _ = child.start_kill();
}

fn failure_message(options: &RunOptions, status: ExitStatus, interrupted: bool) -> String {
    if interrupted {
        format!("'{}' was interrupted", options.display_command())
    } else {
        format!("'{}' failed: {}", options.display_command(), status)
    }
}

fn exit_code_for(status: ExitStatus, interrupted: bool) -> u8 {
    match status.code() {
        Some(code) => u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(EXIT_ERROR),
        None if interrupted => EXIT_INTERRUPTED,
        None => EXIT_ERROR,
    }
}
