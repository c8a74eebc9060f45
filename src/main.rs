//! build-notifier CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use build_notifier::cli::{
    app::{run_build, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, RunOptions},
    backends_cmd::handle_backends_command,
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use build_notifier::infrastructure::{available_notifiers, XdgConfigurationParser};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let presenter = Presenter::new();

    match cli.command {
        Commands::Run {
            implementation,
            command,
        } => match RunOptions::from_command(implementation, command) {
            Some(options) => run_build(options).await,
            None => {
                presenter.error("Missing build command");
                ExitCode::from(EXIT_USAGE_ERROR)
            }
        },
        Commands::Backends { implementation } => {
            let parser = XdgConfigurationParser::new().with_override(implementation);
            let candidates = available_notifiers();
            if let Err(e) = handle_backends_command(&parser, &candidates, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Config { action } => {
            let parser = XdgConfigurationParser::new();
            if let Err(e) = handle_config_command(action, &parser, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let directive = if verbose {
        "build_notifier=debug"
    } else {
        "build_notifier=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
