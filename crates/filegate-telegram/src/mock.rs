//! Recording in-memory transport for development and testing.
//!
//! Simulates the Bot API without network access: membership answers are
//! scripted per `(channel, user)`, and every outbound call is recorded so
//! tests can assert on exactly what the bot sent.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;

use filegate_core::error::AppError;
use filegate_core::result::AppResult;
use filegate_core::traits::{BotIdentity, ChatTransport};
use filegate_core::types::{
    ChatId, InlineKeyboard, MediaArtifact, MemberStatus, MessageId, MessageRef, UserId,
};

/// One outbound call observed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    /// `getChatMember`.
    GetChatMember {
        /// Channel queried.
        channel: String,
        /// User queried.
        user: UserId,
    },
    /// `sendMessage`.
    SendText {
        /// Target chat.
        chat: ChatId,
        /// Message text.
        text: String,
        /// Attached keyboard.
        keyboard: Option<InlineKeyboard>,
        /// Id assigned to the sent message.
        message_id: MessageId,
    },
    /// `sendDocument` / `sendPhoto` / `sendVideo`.
    SendMedia {
        /// Target chat.
        chat: ChatId,
        /// Media sent.
        media: MediaArtifact,
    },
    /// `editMessageText`.
    EditText {
        /// Edited message.
        message: MessageRef,
        /// New text.
        text: String,
    },
    /// `deleteMessage`.
    Delete {
        /// Deleted message.
        message: MessageRef,
    },
    /// `answerCallbackQuery`.
    AnswerCallback {
        /// Callback id.
        callback_id: String,
    },
}

type MembershipAnswer = Result<MemberStatus, String>;

/// Mock transport that records calls in-memory.
#[derive(Debug)]
pub struct MockTransport {
    identity: BotIdentity,
    memberships: Mutex<HashMap<(String, UserId), MembershipAnswer>>,
    calls: Mutex<Vec<TransportCall>>,
    next_message_id: AtomicI64,
    fail_media: AtomicBool,
    fail_delete: AtomicBool,
}

impl MockTransport {
    /// Create a mock bot named `@FileGateBot`.
    pub fn new() -> Self {
        Self {
            identity: BotIdentity {
                id: UserId(9_000_000),
                username: "FileGateBot".to_string(),
            },
            memberships: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            next_message_id: AtomicI64::new(1000),
            fail_media: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    /// Script the membership status of `user` in `channel`.
    pub fn set_member_status(&self, channel: &str, user: UserId, status: MemberStatus) {
        let mut map = self.memberships.lock().unwrap_or_else(|e| e.into_inner());
        map.insert((channel.to_string(), user), Ok(status));
    }

    /// Make membership lookups for `user` in `channel` fail.
    pub fn fail_member_lookup(&self, channel: &str, user: UserId) {
        let mut map = self.memberships.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(
            (channel.to_string(), user),
            Err("Bad Request: chat not found".to_string()),
        );
    }

    /// Make every media send fail.
    pub fn set_fail_media(&self, fail: bool) {
        self.fail_media.store(fail, Ordering::SeqCst);
    }

    /// Make every delete fail.
    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Every call observed so far, in order.
    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Texts sent to `chat`, in order.
    pub fn texts_to(&self, chat: ChatId) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::SendText { chat: c, text, .. } if c == chat => Some(text),
                _ => None,
            })
            .collect()
    }

    /// The most recent text message sent anywhere, with its keyboard.
    pub fn last_text(&self) -> Option<(String, Option<InlineKeyboard>)> {
        self.calls().into_iter().rev().find_map(|call| match call {
            TransportCall::SendText { text, keyboard, .. } => Some((text, keyboard)),
            _ => None,
        })
    }

    /// Media sent, in order.
    pub fn media_sent(&self) -> Vec<(ChatId, MediaArtifact)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::SendMedia { chat, media } => Some((chat, media)),
                _ => None,
            })
            .collect()
    }

    /// Messages deleted, in order.
    pub fn deleted(&self) -> Vec<MessageRef> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                TransportCall::Delete { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Number of membership queries issued.
    pub fn member_queries(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, TransportCall::GetChatMember { .. }))
            .count()
    }

    fn record(&self, call: TransportCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    fn next_id(&self) -> MessageId {
        MessageId(self.next_message_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn get_me(&self) -> AppResult<BotIdentity> {
        Ok(self.identity.clone())
    }

    async fn get_chat_member_status(
        &self,
        channel: &str,
        user: UserId,
    ) -> AppResult<MemberStatus> {
        self.record(TransportCall::GetChatMember {
            channel: channel.to_string(),
            user,
        });
        let map = self.memberships.lock().unwrap_or_else(|e| e.into_inner());
        match map.get(&(channel.to_string(), user)) {
            Some(Ok(status)) => Ok(status.clone()),
            Some(Err(reason)) => Err(AppError::transport(reason.clone())),
            None => Err(AppError::transport("Bad Request: user not found")),
        }
    }

    async fn send_text(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> AppResult<MessageId> {
        let message_id = self.next_id();
        self.record(TransportCall::SendText {
            chat,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
            message_id,
        });
        Ok(message_id)
    }

    async fn send_media(&self, chat: ChatId, media: &MediaArtifact) -> AppResult<MessageId> {
        if self.fail_media.load(Ordering::SeqCst) {
            return Err(AppError::transport("Bad Request: wrong file identifier"));
        }
        self.record(TransportCall::SendMedia {
            chat,
            media: media.clone(),
        });
        Ok(self.next_id())
    }

    async fn edit_message_text(&self, message: MessageRef, text: &str) -> AppResult<()> {
        self.record(TransportCall::EditText {
            message,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn delete_message(&self, message: MessageRef) -> AppResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(AppError::transport(
                "Bad Request: message to delete not found",
            ));
        }
        self.record(TransportCall::Delete { message });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> AppResult<()> {
        self.record(TransportCall::AnswerCallback {
            callback_id: callback_id.to_string(),
        });
        Ok(())
    }
}
