//! Backends command handler

use crate::application::find_notifier;
use crate::application::ports::{ConfigurationParser, Notifier};
use crate::domain::error::ConfigError;

use super::presenter::Presenter;

/// Handle backends subcommand.
///
/// Lists every registered backend and marks the one selection would pick.
pub async fn handle_backends_command<P: ConfigurationParser>(
    parser: &P,
    candidates: &[Box<dyn Notifier>],
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    let configuration = parser.get().await?;
    let selected = find_notifier(candidates, configuration.implementation_name());

    for (index, notifier) in candidates.iter().enumerate() {
        presenter.backend(notifier.name(), selected == Some(index));
    }

    if selected.is_none() {
        presenter.warn(&format!(
            "No backend matches '{}', notifications are disabled",
            configuration.implementation_name()
        ));
    }

    Ok(())
}
