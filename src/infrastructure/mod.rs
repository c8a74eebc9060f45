//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! notification backends, the configuration parser and the skip switch.

pub mod config;
pub mod notification;
pub mod skip;

// Re-export adapters
pub use config::XdgConfigurationParser;
pub use notification::{available_notifiers, NotifyRustNotifier, NotifySendNotifier};
pub use skip::EnvSkipSwitch;
