//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the ExamDesk backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// `message`/`error` from the body, or the status text.
        message: String,
    },

    /// 401: the stored token was rejected.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// 403: the account may not perform this action (or is deactivated).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a local upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A draft failed client-side validation before any request was sent.
    #[error(transparent)]
    Invalid(#[from] desk_core::CoreError),
}
