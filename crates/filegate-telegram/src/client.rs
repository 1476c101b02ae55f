//! Bot API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, trace};

use filegate_core::config::BotConfig;
use filegate_core::error::{AppError, ErrorKind};
use filegate_core::result::AppResult;
use filegate_core::traits::{BotIdentity, ChatTransport};
use filegate_core::types::{
    ChatId, InlineKeyboard, MediaArtifact, MediaKind, MemberStatus, MessageId, MessageRef, UserId,
};

use crate::types::{ApiResponse, ChatMember, InlineKeyboardMarkup, Message, Update, User};

/// Thin JSON-over-HTTPS client for the Telegram Bot API.
#[derive(Clone)]
pub struct BotApiClient {
    http: reqwest::Client,
    /// `{api_url}/bot{token}`; never logged.
    base_url: String,
    api_url: String,
}

impl std::fmt::Debug for BotApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotApiClient")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl BotApiClient {
    /// Build a client from configuration.
    pub fn new(config: &BotConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Transport, "Failed to build HTTP client", e)
            })?;

        let api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url: format!("{api_url}/bot{}", config.token),
            api_url,
        })
    }

    /// Invoke a Bot API method and decode its result.
    pub async fn call<P, R>(&self, method: &str, params: &P) -> AppResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        trace!(method, "Bot API call");

        let response = self
            .http
            .post(format!("{}/{method}", self.base_url))
            .json(params)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Transport,
                    format!("{method} request failed"),
                    e.without_url(),
                )
            })?;

        let body: ApiResponse<R> = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Transport,
                format!("{method} returned an unreadable body"),
                e.without_url(),
            )
        })?;

        match body {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse {
                description,
                error_code,
                ..
            } => Err(AppError::transport(format!(
                "{method} failed ({}): {}",
                error_code.map_or_else(|| "no code".to_string(), |c| c.to_string()),
                description.unwrap_or_else(|| "no description".to_string())
            ))),
        }
    }

    /// Long-poll for updates after `offset`.
    pub async fn get_updates(&self, offset: i64, timeout_seconds: u64) -> AppResult<Vec<Update>> {
        self.call(
            "getUpdates",
            &json!({
                "offset": offset,
                "timeout": timeout_seconds,
                "allowed_updates": ["message", "callback_query"],
            }),
        )
        .await
    }
}

#[async_trait]
impl ChatTransport for BotApiClient {
    async fn get_me(&self) -> AppResult<BotIdentity> {
        let me: User = self.call("getMe", &json!({})).await?;
        let username = me
            .username
            .ok_or_else(|| AppError::transport("getMe returned a bot without a username"))?;
        Ok(BotIdentity {
            id: UserId(me.id),
            username,
        })
    }

    async fn get_chat_member_status(
        &self,
        channel: &str,
        user: UserId,
    ) -> AppResult<MemberStatus> {
        let member: ChatMember = self
            .call(
                "getChatMember",
                &json!({ "chat_id": channel, "user_id": user.get() }),
            )
            .await?;
        debug!(channel, user_id = %user, status = %member.status, "Fetched membership");
        Ok(member.status)
    }

    async fn send_text(
        &self,
        chat: ChatId,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> AppResult<MessageId> {
        let mut params = json!({ "chat_id": chat.get(), "text": text });
        if let Some(keyboard) = keyboard.filter(|k| !k.is_empty()) {
            params["reply_markup"] = serde_json::to_value(InlineKeyboardMarkup::from(keyboard))?;
        }
        let sent: Message = self.call("sendMessage", &params).await?;
        Ok(MessageId(sent.message_id))
    }

    async fn send_media(&self, chat: ChatId, media: &MediaArtifact) -> AppResult<MessageId> {
        let (method, field) = match media.kind {
            MediaKind::Document => ("sendDocument", "document"),
            MediaKind::Photo => ("sendPhoto", "photo"),
            MediaKind::Video => ("sendVideo", "video"),
        };
        let mut params = json!({ "chat_id": chat.get() });
        params[field] = Value::String(media.file_id.clone());
        let sent: Message = self.call(method, &params).await?;
        Ok(MessageId(sent.message_id))
    }

    async fn edit_message_text(&self, message: MessageRef, text: &str) -> AppResult<()> {
        // Returns the edited Message, or `true` for inline messages.
        let _: Value = self
            .call(
                "editMessageText",
                &json!({
                    "chat_id": message.chat_id.get(),
                    "message_id": message.message_id.get(),
                    "text": text,
                }),
            )
            .await?;
        Ok(())
    }

    async fn delete_message(&self, message: MessageRef) -> AppResult<()> {
        let _: bool = self
            .call(
                "deleteMessage",
                &json!({
                    "chat_id": message.chat_id.get(),
                    "message_id": message.message_id.get(),
                }),
            )
            .await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> AppResult<()> {
        let _: bool = self
            .call(
                "answerCallbackQuery",
                &json!({ "callback_query_id": callback_id }),
            )
            .await?;
        Ok(())
    }
}
