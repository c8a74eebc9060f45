//! Config command handler

use crate::application::ports::ConfigurationParser;
use crate::domain::error::ConfigError;
use crate::infrastructure::XdgConfigurationParser;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command(
    action: ConfigAction,
    parser: &XdgConfigurationParser,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Path => {
            presenter.output(&parser.path().display().to_string());
            Ok(())
        }
        ConfigAction::Show => handle_show(parser, presenter).await,
    }
}

async fn handle_show<P: ConfigurationParser>(
    parser: &P,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    let configuration = parser.get().await?;

    presenter.output(&format!(
        "implementation = {}",
        configuration.implementation().unwrap_or("(not set)")
    ));
    presenter.output(&format!(
        "default_implementation = {}",
        configuration.default_implementation()
    ));
    presenter.output(&format!(
        "resolved = {}",
        configuration.implementation_name()
    ));

    Ok(())
}
