use std::sync::Arc;

use anyhow::Context;
use desk_auth::{FileStorage, KeyringStorage, SessionContext, SessionStorage, StoredSession};
use desk_client::ApiClient;
use desk_config::{DeskConfig, SessionBackend, SessionConfig};
use desk_core::enums::UserRole;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DeskConfig,
    pub session: SessionContext,
    pub client: ApiClient,
}

impl AppContext {
    /// Open the session store named by the config and build an API client
    /// carrying its token.
    pub fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let storage = open_storage(&config.session)?;
        let session = SessionContext::open(storage).context("failed to open session")?;
        let client = ApiClient::new(config.api.base_url(), &config.api.user_agent)
            .context("failed to build HTTP client")?
            .with_token(session.token().map(str::to_string));

        tracing::debug!(
            authenticated = session.is_authenticated(),
            source = ?session.detect_source(),
            "session opened"
        );

        Ok(Self {
            config,
            session,
            client,
        })
    }

    /// The logged-in session, or an error telling the user to log in.
    pub fn require_session(&self) -> anyhow::Result<&StoredSession> {
        Ok(self.session.require()?)
    }

    /// Role used to pick exam visibility. Visitors see what students see.
    pub fn viewer_role(&self) -> UserRole {
        self.session.role().unwrap_or(UserRole::Student)
    }

    /// Point the client at the current session token after login or logout.
    pub fn refresh_client(&mut self) {
        self.client = self
            .client
            .clone()
            .with_token(self.session.token().map(str::to_string));
    }
}

fn open_storage(config: &SessionConfig) -> anyhow::Result<Arc<dyn SessionStorage>> {
    Ok(match config.backend {
        SessionBackend::File => {
            let path = config
                .session_path()
                .context("cannot locate a home directory for the session file; set session.path")?;
            Arc::new(FileStorage::new(path))
        }
        SessionBackend::Keyring => Arc::new(KeyringStorage::new()),
    })
}

#[cfg(test)]
mod tests {
    use desk_auth::SessionSource;
    use desk_config::{DeskConfig, SessionBackend};

    use super::open_storage;

    #[test]
    fn file_backend_uses_the_configured_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = DeskConfig::default();
        config.session.backend = SessionBackend::File;
        config.session.path = dir.path().join("session.json").display().to_string();

        let storage = open_storage(&config.session).expect("storage should open");
        assert_eq!(storage.source(), SessionSource::File);
        assert!(storage.load().expect("empty store loads").is_none());
    }

    #[test]
    fn keyring_backend_is_selectable() {
        let mut config = DeskConfig::default();
        config.session.backend = SessionBackend::Keyring;
        let storage = open_storage(&config.session).expect("storage should open");
        assert_eq!(storage.source(), SessionSource::Keyring);
    }
}
