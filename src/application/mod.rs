//! Application layer - Notifier selection, dispatch and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod dispatcher;
pub mod noop;
pub mod ports;
pub mod selector;

// Re-export use cases
pub use dispatcher::{DispatchError, DispatcherState, NotificationDispatcher, CONFIGURATION_KEY};
pub use noop::NoOpNotifier;
pub use selector::{choose_notifier, find_notifier};
