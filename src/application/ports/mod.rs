//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod notifier;
pub mod skip;

// Re-export common types
pub use config::ConfigurationParser;
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use skip::{is_skip_value, SkipSwitch, SKIP_NOTIFICATION};
