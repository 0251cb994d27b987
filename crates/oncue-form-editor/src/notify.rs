//! Notification port
//!
//! User-facing messages (success, failure, info) leave the editor through an
//! injected [`Notifier`]. Delivery is one-way; nothing is acknowledged.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tokio::sync::mpsc;

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Failure,
    Info,
}

/// A user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    #[inline]
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Failure,
            message: message.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Sink for user-facing messages
pub trait Notifier: Send + Sync + Debug {
    /// Emit a message
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Failure => tracing::warn!("{}", notification.message),
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!("{}", notification.message);
            }
        }
    }
}

/// Discards notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Forwards notifications to a channel consumed by the UI layer
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create notifier and the receiving end
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            tracing::debug!("notification receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_delivers_in_order() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        notifier.notify(Notification::success("Field deleted"));
        notifier.notify(Notification::failure("Save failed"));

        assert_eq!(
            receiver.try_recv().unwrap(),
            Notification::success("Field deleted")
        );
        assert_eq!(
            receiver.try_recv().unwrap().level,
            NotificationLevel::Failure
        );
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn channel_tolerates_dropped_receiver() {
        let (notifier, receiver) = ChannelNotifier::new();
        drop(receiver);
        notifier.notify(Notification::info("ignored"));
    }
}
