//! Notification infrastructure module
//!
//! Provides the registered notification backends: notify-send on Linux
//! and notify-rust for every platform.

mod message;
mod notify_rust;
mod notify_send;

pub use message::BuildMessage;
pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use crate::application::ports::Notifier;

/// All registered backends, in selection order
pub fn available_notifiers() -> Vec<Box<dyn Notifier>> {
    vec![
        Box::new(NotifySendNotifier::new()),
        Box::new(NotifyRustNotifier::new()),
    ]
}
