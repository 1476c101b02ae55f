//! Admin-only actions: uploading media and revoking links.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use filegate_core::config::{AdminConfig, CleanupConfig};
use filegate_core::traits::{BotIdentity, ChatTransport, CleanupScheduler};
use filegate_core::types::{
    ChatId, InlineButton, InlineKeyboard, MediaArtifact, MessageRef, UserId,
};
use filegate_entity::link::FileLink;

use crate::context::RequestContext;
use crate::link::{LinkRegistry, RevokeResult, parse_revoke_payload, revoke_callback_data, share_url};
use crate::messages;

/// Result of an upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Sender is not the admin.
    Denied,
    /// Message carried no document, photo or video.
    Unsupported,
    /// A new link was minted.
    Created(FileLink),
    /// The link could not be stored.
    Failed,
}

/// Result of a revoke callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeOutcome {
    /// Sender is not the admin.
    Denied,
    /// Link is revoked (possibly already was).
    Revoked,
    /// Payload was malformed or named an unknown token.
    NotFound,
    /// The store could not be updated.
    Failed,
}

/// Handles `/upload`, media uploads and revoke callbacks.
#[derive(Debug, Clone)]
pub struct AdminService {
    admin: UserId,
    bot: BotIdentity,
    registry: LinkRegistry,
    transport: Arc<dyn ChatTransport>,
    scheduler: Arc<dyn CleanupScheduler>,
    cleanup_delay: Duration,
}

impl AdminService {
    /// Creates the admin service.
    ///
    /// `bot` is used to build share URLs and must carry the bot's username.
    pub fn new(
        admin: &AdminConfig,
        bot: BotIdentity,
        registry: LinkRegistry,
        transport: Arc<dyn ChatTransport>,
        scheduler: Arc<dyn CleanupScheduler>,
        cleanup: &CleanupConfig,
    ) -> Self {
        Self {
            admin: UserId(admin.user_id),
            bot,
            registry,
            transport,
            scheduler,
            cleanup_delay: cleanup.delay(),
        }
    }

    /// Whether `user` is the configured admin.
    pub fn is_admin(&self, user: UserId) -> bool {
        user == self.admin
    }

    /// Reply to `/upload`.
    pub async fn upload_command(&self, ctx: &RequestContext) -> bool {
        let allowed = self.is_admin(ctx.user_id);
        let text = if allowed {
            messages::UPLOAD_INSTRUCTIONS
        } else {
            info!(user_id = %ctx.user_id, "Non-admin used /upload");
            messages::UPLOAD_COMMAND_DENIED
        };
        self.reply(ctx.chat_id, text, None).await;
        allowed
    }

    /// Mint a link for an uploaded media message.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        artifact: Option<MediaArtifact>,
    ) -> UploadOutcome {
        if !self.is_admin(ctx.user_id) {
            info!(user_id = %ctx.user_id, "Non-admin attempted upload");
            self.reply(ctx.chat_id, messages::UPLOAD_DENIED, None).await;
            return UploadOutcome::Denied;
        }

        let Some(artifact) = artifact else {
            self.reply(ctx.chat_id, messages::UNSUPPORTED_MEDIA, None)
                .await;
            return UploadOutcome::Unsupported;
        };

        let link = match self.registry.create(artifact).await {
            Ok(link) => link,
            Err(e) => {
                error!(error = %e, "Failed to create file link");
                self.reply(ctx.chat_id, messages::TEMPORARILY_UNAVAILABLE, None)
                    .await;
                return UploadOutcome::Failed;
            }
        };

        let url = share_url(&self.bot.username, &link.token);
        let keyboard = InlineKeyboard::single_column([InlineButton::callback(
            messages::REVOKE_BUTTON,
            revoke_callback_data(&link.token),
        )]);

        match self
            .transport
            .send_text(ctx.chat_id, &messages::upload_confirmation(&url), Some(&keyboard))
            .await
        {
            Ok(message_id) => {
                let confirmation = MessageRef::new(ctx.chat_id, message_id);
                if let Err(e) = self.scheduler.arm(confirmation, self.cleanup_delay).await {
                    warn!(message = %confirmation, error = %e, "Failed to arm confirmation cleanup");
                }
            }
            Err(e) => {
                warn!(token = %link.token, error = %e, "Upload confirmation could not be sent");
            }
        }

        UploadOutcome::Created(link)
    }

    /// Handle a `revoke_<token>` callback.
    ///
    /// The callback is always acknowledged; the originating message, when
    /// known, is edited to show the result.
    pub async fn revoke(
        &self,
        user: UserId,
        callback_id: &str,
        message: Option<MessageRef>,
        data: Option<&str>,
    ) -> RevokeOutcome {
        if let Err(e) = self.transport.answer_callback(callback_id).await {
            debug!(callback_id, error = %e, "Callback could not be answered");
        }

        if !self.is_admin(user) {
            info!(user_id = %user, "Non-admin attempted revoke");
            self.edit(message, messages::REVOKE_DENIED).await;
            return RevokeOutcome::Denied;
        }

        let token = match data.map(parse_revoke_payload) {
            Some(Ok(token)) => token,
            Some(Err(e)) => {
                debug!(error = %e, "Malformed revoke payload");
                self.edit(message, messages::LINK_NOT_FOUND).await;
                return RevokeOutcome::NotFound;
            }
            None => {
                self.edit(message, messages::LINK_NOT_FOUND).await;
                return RevokeOutcome::NotFound;
            }
        };

        match self.registry.revoke(&token).await {
            Ok(RevokeResult::Revoked) => {
                self.edit(message, messages::LINK_REVOKED).await;
                RevokeOutcome::Revoked
            }
            Ok(RevokeResult::NotFound) => {
                self.edit(message, messages::LINK_NOT_FOUND).await;
                RevokeOutcome::NotFound
            }
            Err(e) => {
                error!(token = %token, error = %e, "Failed to revoke link");
                self.edit(message, messages::TEMPORARILY_UNAVAILABLE).await;
                RevokeOutcome::Failed
            }
        }
    }

    async fn reply(&self, chat: ChatId, text: &str, keyboard: Option<&InlineKeyboard>) {
        if let Err(e) = self.transport.send_text(chat, text, keyboard).await {
            debug!(chat_id = %chat, error = %e, "Reply could not be sent");
        }
    }

    async fn edit(&self, message: Option<MessageRef>, text: &str) {
        let Some(message) = message else {
            return;
        };
        if let Err(e) = self.transport.edit_message_text(message, text).await {
            debug!(message = %message, error = %e, "Message could not be edited");
        }
    }
}
