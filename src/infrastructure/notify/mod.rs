use tokio::sync::mpsc;

use crate::domain::shared::{Notification, Notifier, Severity};

/// Notifier that forwards to the tracing pipeline; used when no shell is
/// attached (headless runs).
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => tracing::info!(message = %notification.message, "notification"),
            Severity::Warning => tracing::warn!(message = %notification.message, "notification"),
            Severity::Error => tracing::error!(message = %notification.message, "notification"),
        }
    }
}

/// Notifier that queues notifications on an unbounded channel for the shell
/// to drain into its transient toast UI.
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // A shell that dropped its receiver no longer renders anything.
        let _ = self.sender.send(notification);
    }
}
