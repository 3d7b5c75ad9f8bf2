use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `examdesk auth login`")]
    NotAuthenticated,

    #[error("session storage error: {0}")]
    StorageError(String),

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("invalid session: {0}")]
    InvalidSession(String),
}
