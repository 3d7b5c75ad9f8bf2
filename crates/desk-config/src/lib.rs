//! # desk-config
//!
//! Layered configuration loading for ExamDesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EXAMDESK_*` prefix, `__` as separator)
//! 2. Project-level `examdesk.toml`
//! 3. User-level `~/.config/examdesk/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EXAMDESK_API__BASE_URL` -> `api.base_url`,
//! `EXAMDESK_POLL__INTERVAL_SECS` -> `poll.interval_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod poll;
mod session;
mod ui;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use poll::PollConfig;
pub use session::{SessionBackend, SessionConfig};
pub use ui::UiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every config key.
pub const ENV_PREFIX: &str = "EXAMDESK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DeskConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl DeskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support. This is the entry point
    /// the CLI uses.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("examdesk.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.has_http_scheme() {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("'{}' must start with http:// or https://", self.api.base_url),
            ));
        }
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::invalid(
                "poll.interval_secs",
                "must be greater than zero",
            ));
        }
        if self.ui.default_limit == 0 {
            return Err(ConfigError::invalid(
                "ui.default_limit",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("examdesk").join("config.toml"))
    }
}
