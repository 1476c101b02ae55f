//! Update classification and dispatch.
//!
//! Inbound surface:
//!
//! | Update                          | Route            |
//! |---------------------------------|------------------|
//! | `/start [file_<token>]`         | `Start`          |
//! | `/upload`                       | `UploadCommand`  |
//! | document / photo / video        | `Media`          |
//! | callback `revoke_<token>`       | `Revoke`         |
//!
//! Everything else is ignored.

use async_trait::async_trait;

use filegate_core::types::{MediaArtifact, MessageRef, UserId};
use filegate_service::RequestContext;
use filegate_service::link::REVOKE_PREFIX;
use filegate_telegram::{Message, Update, UpdateHandler};

use crate::handlers;
use crate::state::AppState;

/// What an update asks the bot to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/start`, with its payload if any.
    Start {
        /// Sender and reply chat.
        ctx: RequestContext,
        /// First argument after the command.
        payload: Option<String>,
    },
    /// `/upload`.
    UploadCommand {
        /// Sender and reply chat.
        ctx: RequestContext,
    },
    /// A media message.
    Media {
        /// Sender and reply chat.
        ctx: RequestContext,
        /// Selected artifact, `None` when no usable variant was attached.
        artifact: Option<MediaArtifact>,
    },
    /// Revoke button press.
    Revoke {
        /// Who pressed the button.
        user: UserId,
        /// Callback id to acknowledge.
        callback_id: String,
        /// Message carrying the button.
        message: Option<MessageRef>,
        /// Raw callback payload.
        data: String,
    },
    /// Nothing to do.
    Ignore(&'static str),
}

impl Route {
    /// Classify an update.
    pub fn classify(update: &Update) -> Self {
        if let Some(query) = &update.callback_query {
            return match query.data.as_deref() {
                Some(data) if data.starts_with(REVOKE_PREFIX) => Self::Revoke {
                    user: query.from.user_id(),
                    callback_id: query.id.clone(),
                    message: query.message.as_ref().map(Message::message_ref),
                    data: data.to_string(),
                },
                _ => Self::Ignore("unrecognized callback"),
            };
        }

        let Some(message) = &update.message else {
            return Self::Ignore("unsupported update type");
        };
        let Some(from) = &message.from else {
            return Self::Ignore("message without sender");
        };
        let ctx = RequestContext::new(from.user_id(), message.chat_id(), &from.first_name);

        if let Some((command, argument)) = message.command() {
            return match command.as_str() {
                "start" => Self::Start {
                    ctx,
                    payload: argument,
                },
                "upload" => Self::UploadCommand { ctx },
                _ => Self::Ignore("unknown command"),
            };
        }

        if message.has_media() {
            return Self::Media {
                ctx,
                artifact: message.media_artifact(),
            };
        }

        Self::Ignore("plain message")
    }
}

/// Dispatches polled updates to the handlers.
#[derive(Debug, Clone)]
pub struct UpdateRouter {
    state: AppState,
}

impl UpdateRouter {
    /// Create a router over the application state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl UpdateHandler for UpdateRouter {
    async fn handle(&self, update: Update) {
        let update_id = update.update_id;
        match Route::classify(&update) {
            Route::Start { ctx, payload } => {
                handlers::start::handle_start(&self.state, &ctx, payload.as_deref()).await;
            }
            Route::UploadCommand { ctx } => {
                handlers::upload::handle_upload_command(&self.state, &ctx).await;
            }
            Route::Media { ctx, artifact } => {
                handlers::upload::handle_media(&self.state, &ctx, artifact).await;
            }
            Route::Revoke {
                user,
                callback_id,
                message,
                data,
            } => {
                handlers::revoke::handle_revoke(&self.state, user, &callback_id, message, &data)
                    .await;
            }
            Route::Ignore(reason) => {
                tracing::trace!(update_id, reason, "Ignoring update");
            }
        }
    }
}
