//! Revoke button handler.

use filegate_core::types::{MessageRef, UserId};
use filegate_service::RevokeOutcome;

use crate::state::AppState;

/// Callback `revoke_<token>`
pub async fn handle_revoke(
    state: &AppState,
    user: UserId,
    callback_id: &str,
    message: Option<MessageRef>,
    data: &str,
) -> RevokeOutcome {
    let outcome = state
        .admin
        .revoke(user, callback_id, message, Some(data))
        .await;
    tracing::debug!(user_id = %user, outcome = ?outcome, "Handled revoke callback");
    outcome
}
