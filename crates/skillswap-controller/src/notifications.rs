//! Transient notifications
//!
//! Each notification lives independently: visible, then fading, then gone.
//! Nothing is queued or coalesced.

use skillswap_types::{Notification, NotificationId, NotificationPhase, Severity};
use tracing::debug;

/// Active notifications in creation order
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    active: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new visible notification
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let notification = Notification::new(id, message, severity);
        debug!("Notification {} ({:?}): {}", id, severity, notification.message);
        self.active.push(notification);
        id
    }

    /// Move a visible notification into its fade. False if absent or already fading.
    pub fn begin_fade(&mut self, id: NotificationId) -> bool {
        match self.active.iter_mut().find(|n| n.id == id) {
            Some(n) if n.phase == NotificationPhase::Visible => {
                n.phase = NotificationPhase::Fading;
                true
            }
            _ => false,
        }
    }

    /// Remove a notification. False if it is already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() != before
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id == id)
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
