//! Form controllers: drafts (exam, task, mock test), the registration wizard,
//! and transient notices.
//!
//! Drafts live only for the duration of one form. A successful submission
//! discards the draft; a failed one keeps it so the user can retry.

mod exam_draft;
mod keyed;
mod notice;
mod submission;
mod task_draft;
mod wizard;

pub use exam_draft::{ExamDraft, ExamPayload, split_list};
pub use keyed::{ItemKey, KeyedList};
pub use mock_test::{
    DEFAULT_DURATION_MINUTES, MockOption, MockQuestion, MockTestDraft, MockTestPayload,
    OPTIONS_PER_QUESTION, QuestionDraft,
};
pub use notice::{Notice, NoticeKind};
pub use submission::DraftSession;
pub use task_draft::TaskDraft;
pub use wizard::{Completion, RegistrationWizard, SignupDetails, SignupRequest, WizardStep};
