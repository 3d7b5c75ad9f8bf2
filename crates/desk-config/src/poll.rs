//! Task poller settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_interval_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PollConfig {
    /// Seconds between task re-fetches. Must be greater than zero.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl PollConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
