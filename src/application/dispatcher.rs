//! Notification dispatcher
//!
//! Owns the single active notifier for a build. `init` picks it,
//! `on_event` forwards build results to it and `close` releases it.

use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::build::BuildEvent;
use crate::domain::context::ExecutionContext;
use crate::domain::error::ConfigError;

use super::ports::{ConfigurationParser, NotificationError, Notifier, SkipSwitch};
use super::selector::choose_notifier;

/// Context key under which the resolved configuration is published
pub const CONFIGURATION_KEY: &str = "notifier.configuration";

/// Errors from the dispatcher lifecycle
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error("Notification dispatcher is already initialized")]
    AlreadyInitialized,

    #[error("Notification dispatcher is not initialized")]
    NotInitialized,

    #[error("Notification dispatcher is closed")]
    Closed,
}

/// Lifecycle state of the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Unstarted,
    Initialized,
    Closed,
}

/// Routes build events to the notifier chosen for this build
pub struct NotificationDispatcher<P, S>
where
    P: ConfigurationParser,
    S: SkipSwitch,
{
    parser: P,
    skip: S,
    candidates: Option<Vec<Box<dyn Notifier>>>,
    active: Option<Box<dyn Notifier>>,
    state: DispatcherState,
}

impl<P, S> NotificationDispatcher<P, S>
where
    P: ConfigurationParser,
    S: SkipSwitch,
{
    /// Create a dispatcher over an ordered list of candidate notifiers
    pub fn new(parser: P, candidates: Vec<Box<dyn Notifier>>, skip: S) -> Self {
        Self {
            parser,
            skip,
            candidates: Some(candidates),
            active: None,
            state: DispatcherState::Unstarted,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Name of the bound notifier, if one was chosen
    pub fn active_notifier(&self) -> Option<&'static str> {
        self.active.as_ref().map(|notifier| notifier.name())
    }

    /// Resolve the configuration, choose the notifier and initialize it.
    ///
    /// The configuration is published in `context` under
    /// [`CONFIGURATION_KEY`] before the notifier sees the context. Once a
    /// notifier is bound it stays bound, even if its own `init` fails, so
    /// that `close` still reaches it.
    pub async fn init(&mut self, context: &mut ExecutionContext) -> Result<(), DispatchError> {
        if self.state == DispatcherState::Closed {
            return Err(DispatchError::Closed);
        }
        if self.candidates.is_none() {
            return Err(DispatchError::AlreadyInitialized);
        }

        debug!("Using build-notifier {}", env!("CARGO_PKG_VERSION"));

        // Candidates stay put until the configuration is known, so a failed
        // lookup leaves the dispatcher unstarted and `init` can be retried.
        let configuration = self.parser.get().await?;
        context.insert(CONFIGURATION_KEY, configuration.clone());

        let candidates = self
            .candidates
            .take()
            .ok_or(DispatchError::AlreadyInitialized)?;

        let notifier = self
            .active
            .insert(choose_notifier(&configuration, candidates));
        let outcome = notifier.init(context).await;

        self.state = DispatcherState::Initialized;
        outcome.map_err(DispatchError::from)
    }

    /// Forward a build event to the active notifier.
    ///
    /// Does nothing while the skip switch is on. Only execution results are
    /// forwarded: a result without a project that carries exceptions goes to
    /// `on_fail_without_project`, every other result goes to `on_event`.
    pub async fn on_event(&self, event: &BuildEvent) -> Result<(), DispatchError> {
        if self.skip.is_skipped() {
            trace!(event = event.kind(), "Notifications skipped");
            return Ok(());
        }

        let BuildEvent::ExecutionResult(result) = event else {
            trace!(event = event.kind(), "Ignoring event");
            return Ok(());
        };

        let notifier = self.bound_notifier()?;

        if result.has_failed_without_project() {
            debug!(notifier = notifier.name(), "Build failed without project");
            notifier.on_fail_without_project(result.exceptions()).await?;
        } else {
            debug!(notifier = notifier.name(), "Forwarding execution result");
            notifier.on_event(result).await?;
        }

        Ok(())
    }

    /// Release the active notifier.
    ///
    /// A dispatcher whose `init` failed before a notifier was bound has
    /// nothing to release; closing it succeeds.
    pub async fn close(&mut self) -> Result<(), DispatchError> {
        if self.state == DispatcherState::Closed {
            return Err(DispatchError::Closed);
        }
        self.state = DispatcherState::Closed;

        match self.active.as_mut() {
            Some(notifier) => {
                debug!(notifier = notifier.name(), "Closing notifier");
                notifier.close().await?;
            }
            None => debug!("No notifier bound, nothing to close"),
        }

        Ok(())
    }

    fn bound_notifier(&self) -> Result<&dyn Notifier, DispatchError> {
        match (self.state, self.active.as_deref()) {
            (DispatcherState::Closed, _) => Err(DispatchError::Closed),
            (_, Some(notifier)) => Ok(notifier),
            (_, None) => Err(DispatchError::NotInitialized),
        }
    }
}
