use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NOTIFICATION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient message shown in the toast stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: NEXT_NOTIFICATION_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
            NotificationKind::Info => "toast toast-info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Notification::info("a");
        let b = Notification::info("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Notification::success("ok").kind, NotificationKind::Success);
        assert_eq!(Notification::error("bad").css_class(), "toast toast-error");
        assert_eq!(Notification::info("fyi").message, "fyi");
    }
}
