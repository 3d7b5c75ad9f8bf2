use std::str::FromStr;
use std::sync::Arc;

use desk_core::enums::UserRole;
use desk_core::responses::LoginResponse;

use crate::error::AuthError;
use crate::storage::{SessionSource, SessionStorage, StoredSession};

const TOKEN_ENV: &str = "EXAMDESK_SESSION__TOKEN";
const ROLE_ENV: &str = "EXAMDESK_SESSION__ROLE";

/// Build a session from the environment tier.
///
/// Both values must be present and non-empty; a token without a role (or the
/// reverse) is no session at all. An unknown role is an error.
pub fn session_from_env_vars(
    token: Option<String>,
    role: Option<String>,
) -> Result<Option<StoredSession>, AuthError> {
    let token = token.filter(|t| !t.trim().is_empty());
    let role = role.filter(|r| !r.trim().is_empty());
    match (token, role) {
        (Some(token), Some(role)) => {
            let role = UserRole::from_str(&role)
                .map_err(|e| AuthError::InvalidSession(format!("{ROLE_ENV}: {e}")))?;
            Ok(Some(StoredSession::new(token.trim(), role)))
        }
        _ => Ok(None),
    }
}

/// The current login session.
///
/// In-memory state only changes after the storage write succeeded, so a
/// failed `login` or `logout` leaves both the store and the context as they
/// were.
pub struct SessionContext {
    storage: Arc<dyn SessionStorage>,
    current: Option<StoredSession>,
    source: Option<SessionSource>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("storage", &self.storage.source())
            .field("authenticated", &self.is_authenticated())
            .field("source", &self.source)
            .finish()
    }
}

impl SessionContext {
    /// Open with the configured storage, falling back to the
    /// `EXAMDESK_SESSION__*` environment variables.
    pub fn open(storage: Arc<dyn SessionStorage>) -> Result<Self, AuthError> {
        let env_session = session_from_env_vars(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(ROLE_ENV).ok(),
        )?;
        Ok(Self::open_with_env(storage, env_session))
    }

    /// Open with an explicit environment-tier session.
    ///
    /// A stored session wins over the environment tier. A corrupt store is
    /// logged and treated as logged out, so `auth login` can repair it.
    #[must_use]
    pub fn open_with_env(
        storage: Arc<dyn SessionStorage>,
        env_session: Option<StoredSession>,
    ) -> Self {
        let stored = match storage.load() {
            Ok(stored) => stored,
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable session");
                None
            }
        };

        let (current, source) = match (stored, env_session) {
            (Some(session), _) => (Some(session), Some(storage.source())),
            (None, Some(session)) => (Some(session), Some(SessionSource::Env)),
            (None, None) => (None, None),
        };

        Self {
            storage,
            current,
            source,
        }
    }

    /// Store a fresh token and role together, dropping any previous profile.
    pub fn login(&mut self, token: impl Into<String>, role: UserRole) -> Result<(), AuthError> {
        self.replace(StoredSession::new(token, role))
    }

    /// Store everything a login response carries in one write.
    pub fn login_as(&mut self, response: &LoginResponse) -> Result<(), AuthError> {
        let mut session = StoredSession::new(response.token.clone(), response.user_type);
        session.user_name.clone_from(&response.name);
        session.user_id.clone_from(&response.user_id);
        session
            .registered_exam
            .clone_from(&response.olympiad_exam_name);
        self.replace(session)
    }

    /// Clear the stored session and the in-memory state.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.storage.clear()?;
        self.current = None;
        self.source = None;
        tracing::debug!("logged out");
        Ok(())
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.current.as_ref().map(|s| s.role)
    }

    #[must_use]
    pub const fn session(&self) -> Option<&StoredSession> {
        self.current.as_ref()
    }

    /// The session, or [`AuthError::NotAuthenticated`].
    pub fn require(&self) -> Result<&StoredSession, AuthError> {
        self.current.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    /// Which tier supplied the current session, if any.
    #[must_use]
    pub const fn detect_source(&self) -> Option<SessionSource> {
        self.source
    }

    pub fn set_profile(
        &mut self,
        user_name: Option<String>,
        user_id: Option<String>,
    ) -> Result<(), AuthError> {
        let mut session = self.require()?.clone();
        session.user_name = user_name;
        session.user_id = user_id;
        self.update(session)
    }

    pub fn set_registered_exam(&mut self, exam: Option<String>) -> Result<(), AuthError> {
        let mut session = self.require()?.clone();
        session.registered_exam = exam;
        self.update(session)
    }

    fn replace(&mut self, session: StoredSession) -> Result<(), AuthError> {
        self.storage.save(&session)?;
        tracing::debug!(role = %session.role, "session stored");
        self.current = Some(session);
        self.source = Some(self.storage.source());
        Ok(())
    }

    /// Env-tier sessions are never written to storage.
    fn update(&mut self, session: StoredSession) -> Result<(), AuthError> {
        if self.source != Some(SessionSource::Env) {
            self.storage.save(&session)?;
        }
        self.current = Some(session);
        Ok(())
    }
}
