//! Terminal presentation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_notice_secs() -> u64 {
    3
}

const fn default_redirect_delay_ms() -> u64 {
    2000
}

const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UiConfig {
    /// How long success and error notices stay visible.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,

    /// Pause between a successful signup and showing the dashboard.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// Default row limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_secs: default_notice_secs(),
            redirect_delay_ms: default_redirect_delay_ms(),
            default_limit: default_limit(),
        }
    }
}

impl UiConfig {
    #[must_use]
    pub const fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }

    #[must_use]
    pub const fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
