//! Bot API wire types.
//!
//! Only the fields the bot reads are modelled; unknown fields are ignored by
//! serde.

use serde::{Deserialize, Serialize};

use filegate_core::types::{
    ChatId, InlineButton, InlineKeyboard, MediaArtifact, MediaKind, MemberStatus, MessageId,
    MessageRef, UserId,
};

/// Envelope every Bot API method responds with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Method result when `ok` is true.
    pub result: Option<T>,
    /// Human-readable error when `ok` is false.
    pub description: Option<String>,
    /// Numeric error code when `ok` is false.
    pub error_code: Option<i32>,
}

/// An incoming update.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Update {
    /// Monotonic update identifier.
    pub update_id: i64,
    /// New incoming message.
    #[serde(default)]
    pub message: Option<Message>,
    /// Inline button press.
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

/// A Telegram user or bot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    /// User id.
    pub id: i64,
    /// Whether this is a bot account.
    #[serde(default)]
    pub is_bot: bool,
    /// First name.
    pub first_name: String,
    /// Username without `@`.
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    /// Typed user id.
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }
}

/// A chat.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chat {
    /// Chat id.
    pub id: i64,
    /// `private`, `group`, `supergroup` or `channel`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A message.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    /// Message id within the chat.
    pub message_id: i64,
    /// Sender, absent for channel posts.
    #[serde(default)]
    pub from: Option<User>,
    /// Chat the message belongs to.
    pub chat: Chat,
    /// Text for text messages.
    #[serde(default)]
    pub text: Option<String>,
    /// General file.
    #[serde(default)]
    pub document: Option<Document>,
    /// Available sizes of a photo.
    #[serde(default)]
    pub photo: Option<Vec<PhotoSize>>,
    /// Video.
    #[serde(default)]
    pub video: Option<Video>,
}

impl Message {
    /// Typed chat id.
    pub fn chat_id(&self) -> ChatId {
        ChatId(self.chat.id)
    }

    /// Reference to this message.
    pub fn message_ref(&self) -> MessageRef {
        MessageRef::new(self.chat_id(), MessageId(self.message_id))
    }

    /// Parse a bot command such as `/start file_abc` or `/start@FileGateBot`.
    ///
    /// Returns the lowercase command name without slash or bot suffix, and the
    /// first argument if one is present.
    pub fn command(&self) -> Option<(String, Option<String>)> {
        let text = self.text.as_deref()?.trim();
        let rest = text.strip_prefix('/')?;
        let mut parts = rest.split_whitespace();
        let head = parts.next()?;
        let name = head.split('@').next().unwrap_or(head).to_ascii_lowercase();
        if name.is_empty() {
            return None;
        }
        Some((name, parts.next().map(str::to_string)))
    }

    /// The media carried by this message: a document, else the largest photo
    /// size, else a video.
    pub fn media_artifact(&self) -> Option<MediaArtifact> {
        if let Some(doc) = &self.document {
            return Some(MediaArtifact::new(&doc.file_id, MediaKind::Document));
        }
        if let Some(largest) = self
            .photo
            .as_deref()
            .and_then(|sizes| sizes.iter().max_by_key(|p| p.pixels()))
        {
            return Some(MediaArtifact::new(&largest.file_id, MediaKind::Photo));
        }
        self.video
            .as_ref()
            .map(|video| MediaArtifact::new(&video.file_id, MediaKind::Video))
    }

    /// Whether the message has any attachment the bot treats as an upload.
    pub fn has_media(&self) -> bool {
        self.document.is_some() || self.photo.is_some() || self.video.is_some()
    }
}

/// A general file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Document {
    /// File id usable for re-sending.
    pub file_id: String,
    /// Original file name.
    #[serde(default)]
    pub file_name: Option<String>,
}

/// One size of a photo.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhotoSize {
    /// File id usable for re-sending.
    pub file_id: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PhotoSize {
    fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// A video.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Video {
    /// File id usable for re-sending.
    pub file_id: String,
}

/// An inline button press.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallbackQuery {
    /// Callback id, used to answer the query.
    pub id: String,
    /// User who pressed the button.
    pub from: User,
    /// Message the button was attached to.
    #[serde(default)]
    pub message: Option<Message>,
    /// Button payload.
    #[serde(default)]
    pub data: Option<String>,
}

/// `getChatMember` result; only the status is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMember {
    /// Membership status.
    pub status: MemberStatus,
}

/// Wire form of an inline keyboard.
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    /// Button rows.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// Wire form of a single inline button.
#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    /// Label.
    pub text: String,
    /// URL to open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Callback payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
}

impl From<&InlineKeyboard> for InlineKeyboardMarkup {
    fn from(keyboard: &InlineKeyboard) -> Self {
        let inline_keyboard = keyboard
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| match button {
                        InlineButton::Url { text, url } => InlineKeyboardButton {
                            text: text.clone(),
                            url: Some(url.clone()),
                            callback_data: None,
                        },
                        InlineButton::Callback { text, data } => InlineKeyboardButton {
                            text: text.clone(),
                            url: None,
                            callback_data: Some(data.clone()),
                        },
                    })
                    .collect()
            })
            .collect();
        Self { inline_keyboard }
    }
}
