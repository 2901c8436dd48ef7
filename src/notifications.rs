use std::fmt;
use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Success,
    Error,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A short-lived message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub variant: Variant,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Shows notifications as log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            Variant::Success => info!("{}", notification.message),
            Variant::Error => warn!("{}", notification.message),
        }
    }
}

/// Collects notifications, for callers that render them later
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|mut notifications| std::mem::take(&mut *notifications))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}

/// Notify unless the message is missing or empty
pub fn send_toast_notification(notifier: &dyn Notifier, message: Option<&str>, variant: Variant) {
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        notifier.notify(Notification {
            message: message.to_string(),
            variant,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_messages_are_skipped() {
        let notifier = RecordingNotifier::new();

        send_toast_notification(&notifier, None, Variant::Error);
        send_toast_notification(&notifier, Some(""), Variant::Error);
        send_toast_notification(&notifier, Some("DB down"), Variant::Error);

        assert_eq!(
            notifier.take(),
            vec![Notification {
                message: "DB down".to_string(),
                variant: Variant::Error,
            }]
        );
        assert!(notifier.take().is_empty());
    }
}
