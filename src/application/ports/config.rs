//! Configuration port interface

use async_trait::async_trait;

use crate::domain::config::Configuration;
use crate::domain::error::ConfigError;

/// Port for retrieving the notifier configuration
#[async_trait]
pub trait ConfigurationParser: Send + Sync {
    /// Read and resolve the configuration for this build.
    ///
    /// # Returns
    /// The resolved configuration, or an error if a source is unreadable
    /// or invalid.
    async fn get(&self) -> Result<Configuration, ConfigError>;
}
