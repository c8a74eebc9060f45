//! Partial notifier configuration as read from a file or the environment

use serde::{Deserialize, Serialize};

use super::configuration::Configuration;
use crate::domain::error::ConfigError;

/// Notifier configuration source.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierFileConfig {
    pub implementation: Option<String>,
    pub default_implementation: Option<String>,
}

impl NotifierFileConfig {
    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            implementation: other.implementation.or(self.implementation),
            default_implementation: other.default_implementation.or(self.default_implementation),
        }
    }

    /// Turn the merged sources into a validated configuration.
    ///
    /// A missing or blank `default_implementation` falls back to `platform_default`.
    pub fn resolve(self, platform_default: &str) -> Result<Configuration, ConfigError> {
        let default_implementation = self
            .default_implementation
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| platform_default.to_string());

        Configuration::new(self.implementation, default_implementation)
    }
}
