//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// build-notifier - desktop notifications for build results
#[derive(Parser, Debug)]
#[command(name = "build-notifier")]
#[command(version)]
#[command(about = "Run a build command and report its result through a desktop notification backend")]
#[command(long_about = None)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a build command and notify when it finishes
    Run {
        /// Notifier implementation to use (e.g. notify-send, notify-rust)
        #[arg(short = 'i', long, value_name = "NAME")]
        implementation: Option<String>,

        /// Build command and its arguments
        #[arg(
            value_name = "COMMAND",
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        command: Vec<String>,
    },
    /// List registered notification backends
    Backends {
        /// Notifier implementation to resolve against
        #[arg(short = 'i', long, value_name = "NAME")]
        implementation: Option<String>,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show config file path
    Path,
    /// Show the resolved configuration
    Show,
}

/// Parsed options for the run command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub implementation: Option<String>,
    pub program: String,
    pub args: Vec<String>,
}

impl RunOptions {
    /// Split a command line into program and arguments.
    ///
    /// Returns `None` for an empty command line.
    pub fn from_command(implementation: Option<String>, command: Vec<String>) -> Option<Self> {
        let mut parts = command.into_iter();
        let program = parts.next()?;

        Some(Self {
            implementation,
            program,
            args: parts.collect(),
        })
    }

    /// Command line as typed, for messages
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
