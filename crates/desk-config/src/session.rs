//! Where the login session is persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// JSON file with owner-only permissions.
    #[default]
    File,
    /// OS keychain (macOS Keychain, Windows Credential Manager).
    Keyring,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default)]
    pub backend: SessionBackend,

    /// Session file location. Empty means `~/.examdesk/session.json`.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    /// Resolved session file path, or `None` if no home directory is known.
    #[must_use]
    pub fn session_path(&self) -> Option<PathBuf> {
        if self.path.is_empty() {
            dirs::home_dir().map(|home| home.join(".examdesk").join("session.json"))
        } else if let Some(rest) = self.path.strip_prefix("~/") {
            dirs::home_dir().map(|home| home.join(rest))
        } else {
            Some(PathBuf::from(&self.path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_used_verbatim() {
        let config = SessionConfig {
            path: "/tmp/desk/session.json".into(),
            ..SessionConfig::default()
        };
        assert_eq!(
            config.session_path(),
            Some(PathBuf::from("/tmp/desk/session.json"))
        );
    }

    #[test]
    fn default_path_lives_under_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(
            SessionConfig::default().session_path(),
            Some(home.join(".examdesk").join("session.json"))
        );
    }
}
