//! XDG configuration parser adapter

use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::ConfigurationParser;
use crate::domain::config::{platform_default_implementation, Configuration, NotifierFileConfig};
use crate::domain::error::ConfigError;

/// Environment variable overriding the configured implementation
pub const IMPLEMENTATION_ENV: &str = "BUILD_NOTIFIER_IMPLEMENTATION";

/// Reads the notifier configuration from an XDG config file,
/// the environment and an optional command-line override.
///
/// Precedence: platform default < file < environment < override.
pub struct XdgConfigurationParser {
    path: PathBuf,
    env_var: String,
    implementation_override: Option<String>,
}

impl XdgConfigurationParser {
    /// Create a new parser with the default XDG path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("build-notifier");

        Self::with_path(config_dir.join("config.toml"))
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            env_var: IMPLEMENTATION_ENV.to_string(),
            implementation_override: None,
        }
    }

    /// Read the implementation override from a different environment variable
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Implementation chosen on the command line, wins over every other source
    pub fn with_override(mut self, implementation: Option<String>) -> Self {
        self.implementation_override = implementation;
        self
    }

    /// Get the configuration file path
    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    /// Check if configuration file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Parse TOML content into a partial config
    fn parse_toml(content: &str) -> Result<NotifierFileConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    async fn load_file(&self) -> Result<NotifierFileConfig, ConfigError> {
        if !self.exists() {
            debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(NotifierFileConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn env_config(&self) -> NotifierFileConfig {
        NotifierFileConfig {
            implementation: env::var(&self.env_var).ok().filter(|s| !s.is_empty()),
            ..Default::default()
        }
    }
}

impl Default for XdgConfigurationParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigurationParser for XdgConfigurationParser {
    async fn get(&self) -> Result<Configuration, ConfigError> {
        let file_config = self.load_file().await?;
        let cli_config = NotifierFileConfig {
            implementation: self.implementation_override.clone(),
            ..Default::default()
        };

        let configuration = file_config
            .merge(self.env_config())
            .merge(cli_config)
            .resolve(platform_default_implementation())?;

        debug!(%configuration, "Resolved notifier configuration");
        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET_ENV: &str = "BUILD_NOTIFIER_TEST_UNSET_IMPLEMENTATION";

    #[test]
    fn default_path_is_xdg() {
        let parser = XdgConfigurationParser::new();
        let path = parser.path();
        assert!(path.to_string_lossy().contains("build-notifier"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let parser = XdgConfigurationParser::with_path("/custom/path/config.toml");
        assert_eq!(parser.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
implementation = "notify-rust"
default_implementation = "notify-send"
"#;

        let config = XdgConfigurationParser::parse_toml(content).unwrap();
        assert_eq!(config.implementation.as_deref(), Some("notify-rust"));
        assert_eq!(config.default_implementation.as_deref(), Some("notify-send"));
    }

    #[test]
    fn parse_toml_rejects_garbage() {
        let err = XdgConfigurationParser::parse_toml("implementation = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_file_uses_platform_default() {
        let dir = tempfile::tempdir().unwrap();
        let parser = XdgConfigurationParser::with_path(dir.path().join("config.toml"))
            .with_env_var(UNSET_ENV);

        let config = parser.get().await.unwrap();
        assert_eq!(config.implementation(), None);
        assert_eq!(config.default_implementation(), platform_default_implementation());
    }

    #[tokio::test]
    async fn file_values_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "implementation = \"desktop\"\n").unwrap();

        let parser = XdgConfigurationParser::with_path(&path).with_env_var(UNSET_ENV);
        let config = parser.get().await.unwrap();

        assert_eq!(config.implementation(), Some("desktop"));
    }

    #[tokio::test]
    async fn override_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "implementation = \"desktop\"\n").unwrap();

        let parser = XdgConfigurationParser::with_path(&path)
            .with_env_var(UNSET_ENV)
            .with_override(Some("notify-send".into()));
        let config = parser.get().await.unwrap();

        assert_eq!(config.implementation(), Some("notify-send"));
    }

    #[tokio::test]
    async fn environment_wins_over_file() {
        const ENV: &str = "BUILD_NOTIFIER_TEST_ENV_IMPLEMENTATION";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "implementation = \"desktop\"\n").unwrap();
        env::set_var(ENV, "notifysend");

        let parser = XdgConfigurationParser::with_path(&path).with_env_var(ENV);
        let config = parser.get().await.unwrap();

        assert_eq!(config.implementation(), Some("notifysend"));
        env::remove_var(ENV);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "implementation = [").unwrap();

        let parser = XdgConfigurationParser::with_path(&path).with_env_var(UNSET_ENV);
        let err = parser.get().await.unwrap_err();

        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
