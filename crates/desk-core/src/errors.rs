//! Cross-cutting error types for ExamDesk.
//!
//! Transport errors (`ApiError`) and storage errors (`AuthError`) live in
//! their own crates. A unified error is deferred to `desk-cli`, where all
//! crate errors converge into `anyhow`.

use thiserror::Error;

/// Errors raised by the pure client logic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {machine} from {from} to {to}")]
    InvalidTransition {
        machine: String,
        from: String,
        to: String,
    },

    /// Form data failed client-side validation. The message is shown inline.
    #[error("{0}")]
    Validation(String),

    /// A value could not be parsed into one of the wire enums.
    #[error("invalid {field} '{value}': expected one of {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
