//! Session stored in the OS keychain.
//!
//! Only macOS and Windows have a native backend enabled. On other platforms
//! the `keyring` crate falls back to an in-process store, so use the file
//! backend there.

use crate::error::AuthError;
use crate::storage::{SessionSource, SessionStorage, StoredSession};

const DEFAULT_KEYRING_SERVICE: &str = "examdesk";
const KEYRING_USER: &str = "session";

/// Returns the keyring service name.
///
/// Defaults to `"examdesk"`. Override via `EXAMDESK_KEYRING_SERVICE` for
/// testing to avoid touching a real session.
fn keyring_service() -> String {
    std::env::var("EXAMDESK_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

#[derive(Debug, Clone)]
pub struct KeyringStorage {
    service: String,
}

impl Default for KeyringStorage {
    fn default() -> Self {
        Self {
            service: keyring_service(),
        }
    }
}

impl KeyringStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self) -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&self.service, KEYRING_USER)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }
}

impl SessionStorage for KeyringStorage {
    fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        match self.entry()?.get_password() {
            Ok(raw) => StoredSession::from_json(&raw, "keyring"),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let json = session.to_json()?;
        self.entry()?
            .set_password(&json)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }

    fn clear(&self) -> Result<(), AuthError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }

    fn source(&self) -> SessionSource {
        SessionSource::Keyring
    }
}
