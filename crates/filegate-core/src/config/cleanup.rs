//! Message cleanup configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delayed deletion of confirmation and delivery messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Minutes to wait before deleting a message.
    #[serde(default = "default_delay_minutes")]
    pub delay_minutes: u64,
}

impl CleanupConfig {
    /// Longest accepted delay: one week.
    pub const MAX_DELAY_MINUTES: u64 = 7 * 24 * 60;

    /// The configured delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_minutes.saturating_mul(60))
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            delay_minutes: default_delay_minutes(),
        }
    }
}

fn default_delay_minutes() -> u64 {
    30
}
