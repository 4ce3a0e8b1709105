//! User-facing notifications.
//!
//! The form only ever hands over a message and a severity; how toasts are
//! queued, shown and dismissed is up to the `Notifier` it was given.

pub mod toast_queue;

pub use toast_queue::{Toast, ToastQueue};

use std::fmt;

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Success => write!(f, "success"),
        }
    }
}

/// A surface that shows transient messages to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);

    fn error(&self, message: &str) {
        self.notify(message, Severity::Error);
    }

    fn success(&self, message: &str) {
        self.notify(message, Severity::Success);
    }
}
