//! # desk-auth
//!
//! Login session state for ExamDesk.
//!
//! [`SessionContext`] is the single holder of the current token and role.
//! Commands receive it by reference; nothing reads the session through a
//! global. The session survives process restarts through a
//! [`SessionStorage`] backend: a JSON file (default), the OS keychain, or
//! memory for tests. A session can also be supplied through the
//! `EXAMDESK_SESSION__TOKEN` and `EXAMDESK_SESSION__ROLE` environment
//! variables, which is how CI scripts drive the CLI.

pub mod error;
pub mod file;
pub mod keyring_store;
pub mod memory;
pub mod session;
pub mod storage;

pub use error::AuthError;
pub use file::FileStorage;
pub use keyring_store::KeyringStorage;
pub use memory::MemoryStorage;
pub use session::{SessionContext, session_from_env_vars};
pub use storage::{SessionSource, SessionStorage, StoredSession};
