//! Notifier configuration value objects

mod configuration;
mod file_config;

pub use configuration::{platform_default_implementation, Configuration};
pub use file_config::NotifierFileConfig;
