//! Session-wide voice listening flag.
//!
//! DESIGN
//! ======
//! One boolean owned by the dashboard and shared with exactly two consumers:
//! the header mic button and the voice panel. Both hold a clone of the same
//! handle; `toggle` is the only way to change it and always announces the
//! new state. Toggling never suspends.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::notify::Notifier;

#[cfg(test)]
#[path = "listening_test.rs"]
mod tests;

#[derive(Debug, Clone)]
pub struct ListeningFlag {
    listening: Arc<AtomicBool>,
    notifier: Notifier,
}

impl ListeningFlag {
    #[must_use]
    pub fn new(notifier: Notifier) -> Self {
        Self { listening: Arc::new(AtomicBool::new(false)), notifier }
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Flip the flag, announce the new state, and return it.
    pub fn toggle(&self) -> bool {
        let now_listening = !self.listening.fetch_xor(true, Ordering::SeqCst);
        info!(listening = now_listening, "voice listening toggled");
        if now_listening {
            self.notifier
                .notify("Voice Assistant Activated", "You can now speak your query in Kannada or English");
        } else {
            self.notifier.notify("Voice Assistant Deactivated", "Voice recording stopped");
        }
        now_listening
    }
}
