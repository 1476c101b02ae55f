//! `/start` handler.

use filegate_service::{RedemptionOutcome, RequestContext};

use crate::state::AppState;

/// `/start [file_<token>]`
pub async fn handle_start(
    state: &AppState,
    ctx: &RequestContext,
    payload: Option<&str>,
) -> RedemptionOutcome {
    let outcome = state.redemption.redeem(ctx, payload).await;
    tracing::debug!(user_id = %ctx.user_id, outcome = ?outcome, "Handled /start");
    outcome
}
