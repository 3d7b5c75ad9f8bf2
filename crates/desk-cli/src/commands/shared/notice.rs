use chrono::{DateTime, Utc};
use desk_core::forms::{DraftSession, Notice, NoticeKind};
use serde::Serialize;

/// A notice as it appears in command output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NoticeView {
    pub kind: &'static str,
    pub message: String,
    /// Seconds left before the notice auto-dismisses; `None` for prompts.
    pub dismiss_after_secs: Option<i64>,
}

impl NoticeView {
    #[must_use]
    pub fn new(notice: &Notice, now: DateTime<Utc>) -> Self {
        Self {
            kind: match notice.kind {
                NoticeKind::Success => "success",
                NoticeKind::Error => "error",
                NoticeKind::Question => "question",
            },
            message: notice.message.clone(),
            dismiss_after_secs: notice
                .ttl
                .map(|ttl| (notice.shown_at + ttl - now).num_seconds().max(0)),
        }
    }
}

/// The form's current notice, if it is still visible.
pub fn visible<D>(session: &DraftSession<D>, now: DateTime<Utc>) -> Option<NoticeView> {
    session
        .visible_notice(now)
        .map(|notice| NoticeView::new(notice, now))
}

/// Notice lifetime from `ui.notice_secs`.
pub fn ttl(secs: u64) -> chrono::Duration {
    chrono::Duration::seconds(i64::from(u32::try_from(secs).unwrap_or(u32::MAX)))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use desk_core::forms::{DraftSession, ExamDraft};

    use super::{NoticeView, ttl, visible};

    #[test]
    fn success_notice_reports_time_left() {
        let now = Utc::now();
        let mut session = DraftSession::open(ExamDraft::new(), ttl(3));
        session.succeed("Exam created successfully", now);

        let view = visible(&session, now + Duration::seconds(1)).expect("still visible");
        assert_eq!(
            view,
            NoticeView {
                kind: "success",
                message: "Exam created successfully".to_string(),
                dismiss_after_secs: Some(2),
            }
        );
        assert!(visible(&session, now + Duration::seconds(4)).is_none());
    }
}
