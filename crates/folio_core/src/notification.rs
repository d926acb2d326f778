//! In-memory notification queue (toasts)

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast waiting to be shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// FIFO of pending notifications
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        log::debug!("Notification: {} - {}", notification.title, notification.description);
        self.queue.push_back(notification);
    }

    /// Oldest pending notification
    pub fn pop(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }

    /// Most recently queued notification
    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut n = Notifications::new();
        n.push(Notification::error("first"));
        n.push(Notification::success("Done", "second"));

        assert_eq!(n.latest().unwrap().description, "second");
        assert_eq!(n.pop().unwrap().description, "first");
        assert_eq!(n.len(), 1);
    }

    #[test]
    fn test_error_title() {
        let note = Notification::error("bad");
        assert!(note.is_error());
        assert_eq!(note.title, "Error");
    }

    #[test]
    fn test_drain_empties() {
        let mut n = Notifications::new();
        n.push(Notification::error("a"));
        n.push(Notification::error("b"));
        assert_eq!(n.drain().len(), 2);
        assert!(n.is_empty());
    }
}
