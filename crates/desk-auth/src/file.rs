//! Session file with owner-only permissions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::storage::{SessionSource, SessionStorage, StoredSession};

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => StoredSession::from_json(&raw, &self.path.display().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::StorageError(format!(
                "read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        let json = session.to_json()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::StorageError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, json)
            .map_err(|e| AuthError::StorageError(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::StorageError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::StorageError(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn source(&self) -> SessionSource {
        SessionSource::File
    }
}
