//! Per-update request context.

use filegate_core::types::{ChatId, UserId};

/// Who sent an update and where replies go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Sender.
    pub user_id: UserId,
    /// Chat to reply in.
    pub chat_id: ChatId,
    /// Sender's first name, used in greetings.
    pub first_name: String,
}

impl RequestContext {
    /// Build a context.
    pub fn new(user_id: UserId, chat_id: ChatId, first_name: impl Into<String>) -> Self {
        Self {
            user_id,
            chat_id,
            first_name: first_name.into(),
        }
    }

    /// Context for a private chat, where the chat id equals the user id.
    pub fn private(user_id: UserId, first_name: impl Into<String>) -> Self {
        Self::new(user_id, user_id.into(), first_name)
    }
}
