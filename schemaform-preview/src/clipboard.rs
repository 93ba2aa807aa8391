//! Clipboard collaborator and transient notifications.

use crate::error::ClipboardError;
use parking_lot::Mutex;
use std::sync::Arc;

/// System clipboard access.
pub trait Clipboard {
    /// Writes text to the clipboard.
    ///
    /// # Errors
    /// Returns `ClipboardError` if the write is refused.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last text written.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// A dismissible message about a completed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier used to dismiss it.
    pub id: u64,
    /// Severity.
    pub kind: NotificationKind,
    /// Text.
    pub message: String,
}

/// Number of notifications kept before the oldest is dropped.
pub const DEFAULT_NOTIFICATION_LIMIT: usize = 5;

/// Bounded queue of pending notifications.
#[derive(Debug, Clone)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
    limit: usize,
}

impl Notifications {
    /// Creates an empty queue with the default limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_NOTIFICATION_LIMIT)
    }

    /// Creates an empty queue holding at most `limit` notifications.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    /// Pushes a notification and returns it.
    ///
    /// The oldest notification is dropped once the queue is full.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> &Notification {
        if self.items.len() >= self.limit {
            self.items.remove(0);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        &self.items[self.items.len() - 1]
    }

    /// Removes a notification. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the pending notifications, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[Notification] {
        &self.items
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shared_between_clones() {
        let clipboard = MemoryClipboard::new();
        let handle = clipboard.clone();
        clipboard.write_text("{}").unwrap();
        assert_eq!(handle.contents().as_deref(), Some("{}"));
    }

    #[test]
    fn test_notifications_push_and_dismiss() {
        let mut notifications = Notifications::new();
        let first = notifications.push(NotificationKind::Success, "copied").id;
        let second = notifications.push(NotificationKind::Error, "failed").id;
        assert_ne!(first, second);
        assert_eq!(notifications.pending().len(), 2);

        assert!(notifications.dismiss(first));
        assert!(!notifications.dismiss(first));
        assert_eq!(notifications.pending()[0].message, "failed");

        notifications.clear();
        assert!(notifications.pending().is_empty());
    }

    #[test]
    fn test_notifications_drop_oldest_when_full() {
        let mut notifications = Notifications::with_limit(3);
        for n in 0..10 {
            notifications.push(NotificationKind::Success, format!("copy {n}"));
        }
        let messages: Vec<&str> = notifications
            .pending()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, vec!["copy 7", "copy 8", "copy 9"]);
        assert_eq!(notifications.pending()[2].id, 9);
    }
}
