//! Administrator and membership gate configuration.

use serde::{Deserialize, Serialize};

/// The single administrator allowed to upload and revoke.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Telegram user id of the administrator.
    pub user_id: i64,
}

/// Channels a user must belong to before redeeming a link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateConfig {
    /// Channel identifiers (`@name` or numeric chat id), checked in order.
    /// An empty list lets everyone through.
    #[serde(default)]
    pub channels: Vec<String>,
}
