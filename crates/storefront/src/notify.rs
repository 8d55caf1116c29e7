//! Transient user notifications ("toasts").

use tokio::sync::mpsc;
use tracing::warn;

/// Receives short-lived error messages meant for the user.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        warn!(%message, "Notification");
    }
}

/// Forwards notifications to a channel, for a UI loop or a test to drain.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn error(&self, message: &str) {
        // Nobody listening is fine for a toast
        let _ = self.sender.send(message.to_string());
    }
}
