//! Application state shared across all handlers.

use std::sync::Arc;

use filegate_core::config::AppConfig;
use filegate_core::traits::BotIdentity;
use filegate_service::{AdminService, RedemptionService};

/// Application state containing all shared dependencies.
///
/// Cloned into every update task; all fields are `Arc`-wrapped.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Identity resolved with `getMe` at startup
    pub bot: BotIdentity,
    /// `/start` handling
    pub redemption: Arc<RedemptionService>,
    /// `/upload`, media uploads and revoke callbacks
    pub admin: Arc<AdminService>,
}
