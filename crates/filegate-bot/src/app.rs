//! Application builder: wires services into an [`AppState`].

use std::sync::Arc;

use filegate_core::config::AppConfig;
use filegate_core::result::AppResult;
use filegate_core::traits::{ChatTransport, CleanupScheduler};
use filegate_database::repositories::FileLinkStore;
use filegate_service::{AdminService, LinkRegistry, MembershipGate, RedemptionService};

use crate::state::AppState;

/// Resolve the bot identity and build every service over the given
/// collaborators.
pub async fn build_state(
    config: Arc<AppConfig>,
    transport: Arc<dyn ChatTransport>,
    store: Arc<dyn FileLinkStore>,
    scheduler: Arc<dyn CleanupScheduler>,
) -> AppResult<AppState> {
    let bot = transport.get_me().await?;
    tracing::info!(bot_id = %bot.id, username = %bot.username, "Resolved bot identity");

    let registry = LinkRegistry::new(store);
    let gate = MembershipGate::new(Arc::clone(&transport), &config.gate);
    tracing::info!(channels = gate.channels().len(), "Membership gate configured");

    let redemption = RedemptionService::new(
        gate,
        registry.clone(),
        Arc::clone(&transport),
        Arc::clone(&scheduler),
        &config.cleanup,
    );
    let admin = AdminService::new(
        &config.admin,
        bot.clone(),
        registry,
        transport,
        scheduler,
        &config.cleanup,
    );

    Ok(AppState {
        config,
        bot,
        redemption: Arc::new(redemption),
        admin: Arc::new(admin),
    })
}
