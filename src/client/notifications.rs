// src/client/notifications.rs

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Transient, user-visible message produced by a save or unsave
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success {
        job_id: String,
        message: String,
    },
    Error {
        job_id: String,
        message: String,
        /// Set for authentication failures: prompt the user to sign in again
        reauthenticate: bool,
    },
}

impl Notification {
    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error { .. })
    }
}

/// Sending half handed to the reconciler; a dropped receiver is not an error
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<Notification>,
}

impl Notifier {
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            debug!("Notification dropped: no listener");
        }
    }
}
