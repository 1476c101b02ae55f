//! `file_<token>` deep links and `revoke_<token>` callback payloads.

use filegate_core::error::AppError;
use filegate_entity::link::LinkToken;

/// Prefix of the `/start` payload that carries a link token.
pub const START_PREFIX: &str = "file_";

/// Prefix of the revoke button's callback payload.
pub const REVOKE_PREFIX: &str = "revoke_";

/// Extract the token from a `/start` payload of the form `file_<token>`.
pub fn parse_start_payload(payload: &str) -> Result<LinkToken, AppError> {
    let raw = payload.trim().strip_prefix(START_PREFIX).ok_or_else(|| {
        AppError::validation(format!("Start payload must begin with '{START_PREFIX}'"))
    })?;
    LinkToken::parse(raw)
}

/// Extract the token from a `revoke_<token>` callback payload.
pub fn parse_revoke_payload(data: &str) -> Result<LinkToken, AppError> {
    let raw = data.strip_prefix(REVOKE_PREFIX).ok_or_else(|| {
        AppError::validation(format!("Callback payload must begin with '{REVOKE_PREFIX}'"))
    })?;
    LinkToken::parse(raw)
}

/// Shareable deep link that opens the bot with the token as start payload.
pub fn share_url(bot_username: &str, token: &LinkToken) -> String {
    format!("https://t.me/{bot_username}?start={START_PREFIX}{token}")
}

/// Callback payload of the revoke button for `token`.
pub fn revoke_callback_data(token: &LinkToken) -> String {
    format!("{REVOKE_PREFIX}{token}")
}
