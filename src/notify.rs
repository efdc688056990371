//! Transient one-shot notifications ("toasts").
//!
//! DESIGN
//! ======
//! Panels push notifications into an unbounded channel and never wait for
//! them to be shown. The single `NotificationFeed` receiver belongs to
//! whatever renders them (the CLI drains it to stderr). If the feed has been
//! dropped, sends are logged and discarded.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    /// Blocking error styling, used for `InputMissing`.
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

/// Sending half. Cheap to clone; every panel holds one.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

/// Receiving half.
#[derive(Debug)]
pub struct NotificationFeed {
    rx: mpsc::UnboundedReceiver<Notification>,
}

/// Create a connected notifier/feed pair.
#[must_use]
pub fn channel() -> (Notifier, NotificationFeed) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, NotificationFeed { rx })
}

impl Notifier {
    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>) {
        self.send(Notification { title: title.into(), description: description.into(), variant: Variant::Default });
    }

    pub fn alert(&self, title: impl Into<String>, description: impl Into<String>) {
        self.send(Notification { title: title.into(), description: description.into(), variant: Variant::Destructive });
    }

    fn send(&self, notification: Notification) {
        info!(title = %notification.title, variant = ?notification.variant, "notification");
        if self.tx.send(notification).is_err() {
            debug!("notification feed closed; dropping");
        }
    }
}

impl NotificationFeed {
    /// Wait for the next notification. `None` once every notifier is gone.
    pub async fn next(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }

    /// Take everything already queued without waiting.
    pub fn drain(&mut self) -> Vec<Notification> {
        let mut out = Vec::new();
        while let Ok(n) = self.rx.try_recv() {
            out.push(n);
        }
        out
    }
}
