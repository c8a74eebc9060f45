//! Notification skip switch port

/// Name of the process-wide switch that disables notifications
pub const SKIP_NOTIFICATION: &str = "skipNotification";

/// Port for the switch that turns event forwarding off.
///
/// Implementations are asked on every event; they must not cache the answer.
pub trait SkipSwitch: Send + Sync {
    fn is_skipped(&self) -> bool;
}

/// Whether a raw switch value means "skip" (case-insensitive `true`)
pub fn is_skip_value(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
