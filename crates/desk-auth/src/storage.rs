use std::fmt;

use desk_core::enums::UserRole;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Everything persisted about the logged-in user, written as one JSON
/// document. Token and role live in the same record, so they are always
/// stored and cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Exam a student registered for, used to pick their dashboard exams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_exam: Option<String>,
}

impl StoredSession {
    #[must_use]
    pub fn new(token: impl Into<String>, role: UserRole) -> Self {
        Self {
            token: token.into(),
            role,
            user_name: None,
            user_id: None,
            registered_exam: None,
        }
    }

    pub(crate) fn to_json(&self) -> Result<String, AuthError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AuthError::StorageError(format!("serialize session: {e}")))
    }

    /// Parse a stored document. Blank content counts as "no session".
    pub(crate) fn from_json(raw: &str, origin: &str) -> Result<Option<Self>, AuthError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| AuthError::InvalidSession(format!("{origin}: {e}")))
    }
}

/// Where the current session came from (for `auth status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    File,
    Keyring,
    Memory,
    Env,
}

impl SessionSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Keyring => "keyring",
            Self::Memory => "memory",
            Self::Env => "env",
        }
    }
}

impl fmt::Display for SessionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent home of a [`StoredSession`]. Exactly one session per location.
pub trait SessionStorage: Send + Sync {
    /// `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<StoredSession>, AuthError>;

    /// Replace the stored session in a single write.
    fn save(&self, session: &StoredSession) -> Result<(), AuthError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), AuthError>;

    fn source(&self) -> SessionSource;
}
