//! Bot API configuration.

use serde::{Deserialize, Serialize};

/// Credentials and long-polling settings for the Telegram Bot API.
#[derive(Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot token issued by BotFather.
    pub token: String,
    /// Base URL of the Bot API server.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Long-poll timeout passed to `getUpdates`, in seconds.
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_seconds: u64,
    /// HTTP request timeout in seconds. Must exceed the poll timeout.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Pause after a failed `getUpdates` call, in seconds.
    #[serde(default = "default_retry_backoff")]
    pub retry_backoff_seconds: u64,
    /// Maximum number of updates handled concurrently.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_updates: usize,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"****")
            .field("api_url", &self.api_url)
            .field("poll_timeout_seconds", &self.poll_timeout_seconds)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .field("retry_backoff_seconds", &self.retry_backoff_seconds)
            .field("max_concurrent_updates", &self.max_concurrent_updates)
            .finish()
    }
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    45
}

fn default_retry_backoff() -> u64 {
    5
}

fn default_max_concurrent() -> usize {
    16
}
