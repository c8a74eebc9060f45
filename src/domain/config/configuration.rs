//! Resolved notifier configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Backend used when nothing else is configured on Linux
#[cfg(target_os = "linux")]
const PLATFORM_DEFAULT: &str = "notify-send";

/// Backend used when nothing else is configured
#[cfg(not(target_os = "linux"))]
const PLATFORM_DEFAULT: &str = "notify-rust";

/// Name of the backend to use when the user did not pick one.
pub const fn platform_default_implementation() -> &'static str {
    PLATFORM_DEFAULT
}

/// Configuration for one build invocation.
///
/// Holds the user's explicit backend choice (if any) and the default
/// backend name. Both names are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigurationFields")]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    implementation: Option<String>,
    default_implementation: String,
}

/// Unvalidated shape of a serialized [`Configuration`]
#[derive(Deserialize)]
struct ConfigurationFields {
    implementation: Option<String>,
    default_implementation: String,
}

impl TryFrom<ConfigurationFields> for Configuration {
    type Error = ConfigError;

    fn try_from(fields: ConfigurationFields) -> Result<Self, Self::Error> {
        Self::new(fields.implementation, fields.default_implementation)
    }
}

impl Configuration {
    /// Create a validated configuration.
    ///
    /// An empty or blank `implementation` counts as "not set".
    pub fn new(
        implementation: Option<String>,
        default_implementation: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let default_implementation = default_implementation.into().trim().to_string();
        if default_implementation.is_empty() {
            return Err(ConfigError::ValidationError {
                key: "default_implementation".to_string(),
                message: "Value must not be empty".to_string(),
            });
        }

        let implementation = implementation
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            implementation,
            default_implementation,
        })
    }

    /// Explicit backend requested by the user
    pub fn implementation(&self) -> Option<&str> {
        self.implementation.as_deref()
    }

    /// Whether the user explicitly requested a backend
    pub fn has_implementation(&self) -> bool {
        self.implementation.is_some()
    }

    /// Backend used when the user did not request one
    pub fn default_implementation(&self) -> &str {
        &self.default_implementation
    }

    /// The backend name selection should look for.
    ///
    /// An explicit user choice always wins over the default.
    pub fn implementation_name(&self) -> &str {
        self.implementation
            .as_deref()
            .unwrap_or(&self.default_implementation)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.implementation {
            Some(name) => write!(
                f,
                "{} (default: {})",
                name, self.default_implementation
            ),
            None => write!(f, "{} (default)", self.default_implementation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_implementation_wins() {
        let config = Configuration::new(Some("notify-rust".into()), "notify-send").unwrap();
        assert!(config.has_implementation());
        assert_eq!(config.implementation_name(), "notify-rust");
        assert_eq!(config.default_implementation(), "notify-send");
    }

    #[test]
    fn falls_back_to_default() {
        let config = Configuration::new(None, "notify-send").unwrap();
        assert!(!config.has_implementation());
        assert_eq!(config.implementation_name(), "notify-send");
    }

    #[test]
    fn blank_implementation_is_absent() {
        let config = Configuration::new(Some("   ".into()), "notify-send").unwrap();
        assert_eq!(config.implementation(), None);
        assert_eq!(config.implementation_name(), "notify-send");
    }

    #[test]
    fn empty_default_is_rejected() {
        let err = Configuration::new(None, "").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { ref key, .. } if key == "default_implementation"));
    }

    #[test]
    fn platform_default_is_not_empty() {
        assert!(!platform_default_implementation().is_empty());
    }

    #[test]
    fn serde_keeps_the_choice() {
        let config = Configuration::new(Some("desktop".into()), "notify-send").unwrap();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("implementation = \"desktop\""));

        let parsed: Configuration = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn deserialize_validates_names() {
        let parsed: Configuration =
            toml::from_str("implementation = \"  \"\ndefault_implementation = \"notify-send\"")
                .unwrap();
        assert_eq!(parsed.implementation(), None);

        let err = toml::from_str::<Configuration>("default_implementation = \"\"").unwrap_err();
        assert!(err.to_string().contains("must not be empty"), "got: {}", err);
    }

    #[test]
    fn display_shows_choice() {
        let config = Configuration::new(Some("desktop".into()), "notify-send").unwrap();
        assert_eq!(config.to_string(), "desktop (default: notify-send)");

        let config = Configuration::new(None, "notify-send").unwrap();
        assert_eq!(config.to_string(), "notify-send (default)");
    }
}
