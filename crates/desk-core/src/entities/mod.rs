//! Entity structs for backend records.
//!
//! Field names follow the backend's camelCase JSON. Record ids accept both
//! `id` and the Mongo-style `_id` on input and always serialize as `id`.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod exam;
mod export;
mod registration;
mod task;
mod user;

pub use exam::{Exam, Faq, ResourceGroup, SyllabusSection};
pub use export::ExportFilters;
pub use registration::{BulkRegistrationReport, ProcessedRow, RegisteredStudent};
pub use task::{Attachment, Comment, Task};
pub use user::User;
