//! Notifier selection

use tracing::debug;

use crate::domain::config::Configuration;

use super::noop::NoOpNotifier;
use super::ports::Notifier;

/// Position of the first candidate answering to `implementation`.
///
/// Candidates are scanned in order; the first match wins.
pub fn find_notifier(candidates: &[Box<dyn Notifier>], implementation: &str) -> Option<usize> {
    candidates
        .iter()
        .position(|notifier| notifier.is_candidate_for(implementation))
}

/// Pick the notifier for this build.
///
/// Looks for the user's explicit choice, or the default implementation
/// when none was made. Falls back to [`NoOpNotifier`] when no candidate
/// matches; an unknown name is not an error.
pub fn choose_notifier(
    configuration: &Configuration,
    mut candidates: Vec<Box<dyn Notifier>>,
) -> Box<dyn Notifier> {
    debug!("Choosing notifier...");

    let implementation = configuration.implementation_name();

    match find_notifier(&candidates, implementation) {
        Some(index) => {
            let notifier = candidates.swap_remove(index);
            debug!(implementation, notifier = notifier.name(), "Using notifier");
            notifier
        }
        None => {
            debug!(implementation, "Using default notifier");
            Box::new(NoOpNotifier::new())
        }
    }
}
