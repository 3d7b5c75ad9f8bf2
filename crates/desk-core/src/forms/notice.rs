use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    /// Confirmation prompt. Stays until answered.
    Question,
}

/// Transient message shown after a form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub shown_at: DateTime<Utc>,
    /// `None` means the notice never expires on its own.
    pub ttl: Option<Duration>,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>, shown_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
            shown_at,
            ttl: Some(ttl),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>, shown_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            shown_at,
            ttl: Some(ttl),
        }
    }

    #[must_use]
    pub fn question(message: impl Into<String>, shown_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Question,
            shown_at,
            ttl: None,
        }
    }

    #[must_use]
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.ttl.is_none_or(|ttl| now < self.shown_at + ttl)
    }
}
