//! Messaging transport trait.
//!
//! The core never talks to the Bot API directly; every outbound call goes
//! through [`ChatTransport`]. The HTTP client in `filegate-telegram`
//! implements it for production, and a recording mock implements it for
//! tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::{
    ChatId, InlineKeyboard, MediaArtifact, MemberStatus, MessageId, MessageRef, UserId,
};

/// Identity of the bot account, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    /// Bot user id.
    pub id: UserId,
    /// Bot username without the leading `@`.
    pub username: String,
}

/// Outbound operations against the messaging platform.
///
/// Every method returns an [`AppResult`]; callers decide whether a failure
/// fails closed, is reported, or is swallowed.
#[async_trait]
pub trait ChatTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve the bot's own identity.
    async fn get_me(&self) -> AppResult<BotIdentity>;

    /// Query the membership status of `user` in `channel`.
    ///
    /// `channel` is either `@username` or a numeric chat id.
    async fn get_chat_member_status(&self, channel: &str, user: UserId)
    -> AppResult<MemberStatus>;

    /// Send a text message, optionally with an inline keyboard.
    async fn send_text(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> AppResult<MessageId>;

    /// Send previously uploaded media by file id.
    async fn send_media(&self, chat: ChatId, media: &MediaArtifact) -> AppResult<MessageId>;

    /// Replace the text of an existing message. Any keyboard is removed.
    async fn edit_message_text(&self, message: MessageRef, text: &str) -> AppResult<()>;

    /// Delete a message.
    async fn delete_message(&self, message: MessageRef) -> AppResult<()>;

    /// Acknowledge a callback query so the client stops its spinner.
    async fn answer_callback(&self, callback_id: &str) -> AppResult<()>;
}
