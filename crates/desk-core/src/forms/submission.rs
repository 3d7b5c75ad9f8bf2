use chrono::{DateTime, Duration, Utc};

use super::notice::Notice;

/// Lifetime of one form: holds the draft until it is submitted or cancelled
/// and remembers the last notice shown.
#[derive(Debug, Clone)]
pub struct DraftSession<D> {
    draft: Option<D>,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl<D> DraftSession<D> {
    #[must_use]
    pub const fn open(draft: D, notice_ttl: Duration) -> Self {
        Self {
            draft: Some(draft),
            notice: None,
            notice_ttl,
        }
    }

    /// `None` once the draft was submitted successfully or cancelled.
    #[must_use]
    pub const fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        self.draft.as_mut()
    }

    pub fn cancel(&mut self) -> Option<D> {
        self.draft.take()
    }

    /// The request went through: drop the draft and show a success notice.
    pub fn succeed(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> Option<D> {
        self.notice = Some(Notice::success(message, now, self.notice_ttl));
        self.draft.take()
    }

    /// The request failed: keep the draft for a retry.
    pub fn fail(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.notice = Some(Notice::error(message, now, self.notice_ttl));
    }

    #[must_use]
    pub fn visible_notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice.as_ref().filter(|notice| notice.is_visible(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ExamDraft;
    use crate::forms::notice::NoticeKind;

    #[test]
    fn success_discards_draft_and_shows_notice() {
        let now = Utc::now();
        let mut session = DraftSession::open(ExamDraft::new(), Duration::seconds(3));
        assert!(session.succeed("Exam created successfully", now).is_some());
        assert!(session.draft().is_none());
        let notice = session.visible_notice(now).unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(session.visible_notice(now + Duration::seconds(4)).is_none());
    }

    #[test]
    fn failure_keeps_draft() {
        let now = Utc::now();
        let mut draft = ExamDraft::new();
        draft.title = "Kept".into();
        let mut session = DraftSession::open(draft, Duration::seconds(3));
        session.fail("Failed to create exam", now);
        assert_eq!(session.draft().unwrap().title, "Kept");
        assert_eq!(session.visible_notice(now).unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn cancel_discards_without_notice() {
        let mut session = DraftSession::open(ExamDraft::new(), Duration::seconds(3));
        assert!(session.cancel().is_some());
        assert!(session.draft_mut().is_none());
        assert!(session.visible_notice(Utc::now()).is_none());
    }
}
