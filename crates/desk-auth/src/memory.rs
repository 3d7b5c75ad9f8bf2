//! In-memory session storage for tests and one-shot scripts.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::AuthError;
use crate::storage::{SessionSource, SessionStorage, StoredSession};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    stored: Mutex<Option<StoredSession>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            stored: Mutex::new(Some(session)),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every later `save` and `clear` fail, as a full disk would.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), AuthError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(AuthError::StorageError("storage is read-only".into()))
        } else {
            Ok(())
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<StoredSession>>, AuthError> {
        self.stored
            .lock()
            .map_err(|_| AuthError::StorageError("session lock poisoned".into()))
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        self.check_writable()?;
        *self.lock()? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.check_writable()?;
        *self.lock()? = None;
        Ok(())
    }

    fn source(&self) -> SessionSource {
        SessionSource::Memory
    }
}
