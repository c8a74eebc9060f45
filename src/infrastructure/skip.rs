//! Environment-backed skip switch

use std::env;

use crate::application::ports::{is_skip_value, SkipSwitch, SKIP_NOTIFICATION};

/// Skip switch read from an environment variable on every call
pub struct EnvSkipSwitch {
    var: String,
}

impl EnvSkipSwitch {
    /// Read the `skipNotification` variable
    pub fn new() -> Self {
        Self::with_var(SKIP_NOTIFICATION)
    }

    /// Read a different variable
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSkipSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl SkipSwitch for EnvSkipSwitch {
    fn is_skipped(&self) -> bool {
        env::var(&self.var).map(|v| is_skip_value(&v)).unwrap_or(false)
    }
}
