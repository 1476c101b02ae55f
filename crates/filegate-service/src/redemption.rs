//! Redemption flow: gate check, link lookup, delivery.
//!
//! ```text
//! Start -> GateCheck -> Denied
//!                    -> (no `file_` payload) Greeted
//!                    -> Lookup -> Invalid
//!                              -> Deliver -> Delivered | DeliveryFailed
//! ```
//!
//! Every terminal state sends exactly one user-visible response (plus the
//! media itself on delivery). A payload without the `file_` prefix is a
//! plain entry. Unknown, revoked and malformed tokens all end in
//! [`RedemptionOutcome::Invalid`] with the same reply.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use filegate_core::config::CleanupConfig;
use filegate_core::traits::{ChatTransport, CleanupScheduler};
use filegate_core::types::{ChatId, InlineKeyboard, MessageRef};
use filegate_entity::link::LinkToken;

use crate::context::RequestContext;
use crate::gate::{AccessDecision, MembershipGate, subscribe_keyboard, subscribe_text};
use crate::link::{LinkRegistry, START_PREFIX, parse_start_payload};
use crate::messages;

/// Terminal state of a redemption request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedemptionOutcome {
    /// The gate denied access; the user was asked to join `unmet`.
    Denied {
        /// Channels listed in the prompt.
        unmet: Vec<String>,
    },
    /// Plain `/start`, or a payload that is not a file link.
    Greeted,
    /// Unknown, revoked, or malformed token.
    Invalid,
    /// The media was sent.
    Delivered {
        /// Redeemed token.
        token: LinkToken,
    },
    /// The media could not be sent; a notice was shown instead.
    DeliveryFailed {
        /// Redeemed token.
        token: LinkToken,
    },
    /// The link store could not be read.
    Unavailable,
}

/// Orchestrates `/start` requests.
#[derive(Debug, Clone)]
pub struct RedemptionService {
    gate: MembershipGate,
    registry: LinkRegistry,
    transport: Arc<dyn ChatTransport>,
    scheduler: Arc<dyn CleanupScheduler>,
    cleanup_delay: Duration,
}

impl RedemptionService {
    /// Creates a new redemption service.
    pub fn new(
        gate: MembershipGate,
        registry: LinkRegistry,
        transport: Arc<dyn ChatTransport>,
        scheduler: Arc<dyn CleanupScheduler>,
        cleanup: &CleanupConfig,
    ) -> Self {
        Self {
            gate,
            registry,
            transport,
            scheduler,
            cleanup_delay: cleanup.delay(),
        }
    }

    /// Handle `/start` with an optional payload.
    pub async fn redeem(&self, ctx: &RequestContext, payload: Option<&str>) -> RedemptionOutcome {
        if let AccessDecision::Denied { unmet } = self.gate.check_access(ctx.user_id).await {
            info!(user_id = %ctx.user_id, unmet = ?unmet, "Gate denied access");
            let keyboard = subscribe_keyboard(&unmet);
            self.reply(ctx.chat_id, &subscribe_text(&unmet), Some(&keyboard))
                .await;
            return RedemptionOutcome::Denied { unmet };
        }

        let Some(payload) = payload
            .map(str::trim)
            .filter(|p| p.starts_with(START_PREFIX))
        else {
            self.reply(ctx.chat_id, &messages::greeting(&ctx.first_name), None)
                .await;
            return RedemptionOutcome::Greeted;
        };

        let token = match parse_start_payload(payload) {
            Ok(token) => token,
            Err(e) => {
                debug!(user_id = %ctx.user_id, error = %e, "Malformed start payload");
                return self.reject(ctx).await;
            }
        };

        let link = match self.registry.resolve(&token).await {
            Ok(Some(link)) if link.is_redeemable() => link,
            Ok(_) => {
                info!(user_id = %ctx.user_id, token = %token, "Link not redeemable");
                return self.reject(ctx).await;
            }
            Err(e) => {
                error!(token = %token, error = %e, "Link lookup failed");
                self.reply(ctx.chat_id, messages::TEMPORARILY_UNAVAILABLE, None)
                    .await;
                return RedemptionOutcome::Unavailable;
            }
        };

        self.reply(ctx.chat_id, messages::ACCESSING_FILE, None).await;

        match self.transport.send_media(ctx.chat_id, &link.artifact()).await {
            Ok(message_id) => {
                info!(user_id = %ctx.user_id, token = %token, "File delivered");
                let delivered = MessageRef::new(ctx.chat_id, message_id);
                if let Err(e) = self.scheduler.arm(delivered, self.cleanup_delay).await {
                    warn!(message = %delivered, error = %e, "Failed to arm delivery cleanup");
                }
                RedemptionOutcome::Delivered { token }
            }
            Err(e) => {
                warn!(user_id = %ctx.user_id, token = %token, error = %e, "File delivery failed");
                self.reply(ctx.chat_id, messages::DELIVERY_FAILED, None)
                    .await;
                RedemptionOutcome::DeliveryFailed { token }
            }
        }
    }

    async fn reject(&self, ctx: &RequestContext) -> RedemptionOutcome {
        self.reply(ctx.chat_id, messages::LINK_INVALID, None).await;
        RedemptionOutcome::Invalid
    }

    /// Best-effort reply; failures are logged and dropped.
    async fn reply(&self, chat: ChatId, text: &str, keyboard: Option<&InlineKeyboard>) {
        if let Err(e) = self.transport.send_text(chat, text, keyboard).await {
            debug!(chat_id = %chat, error = %e, "Reply could not be sent");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filegate_core::types::{
        InlineButton, MediaArtifact, MediaKind, MemberStatus, MessageId, UserId,
    };
    use filegate_telegram::TransportCall;

    use crate::testing::{DELAY, Fixture};

    const USER: UserId = UserId(700);

    fn service(fx: &Fixture) -> RedemptionService {
        RedemptionService::new(
            fx.gate.clone(),
            fx.registry.clone(),
            fx.transport(),
            fx.scheduler(),
            &CleanupConfig { delay_minutes: 30 },
        )
    }

    fn ctx() -> RequestContext {
        RequestContext::private(USER, "Ada")
    }

    #[tokio::test]
    async fn test_plain_start_greets() {
        let fx = Fixture::new(&[]);
        let outcome = service(&fx).redeem(&ctx(), None).await;

        assert_eq!(outcome, RedemptionOutcome::Greeted);
        assert_eq!(
            fx.transport.texts_to(USER.into()),
            vec!["Hello Ada! Use /upload to share files (admin only).".to_string()]
        );
    }

    #[tokio::test]
    async fn test_valid_link_delivers_and_arms_cleanup() {
        let fx = Fixture::new(&["@news"]);
        fx.transport
            .set_member_status("@news", USER, MemberStatus::Member);
        let artifact = MediaArtifact::new("BQAC-doc", MediaKind::Document);
        let link = fx.registry.create(artifact.clone()).await.unwrap();

        let payload = format!("file_{}", link.token);
        let outcome = service(&fx).redeem(&ctx(), Some(&payload)).await;

        assert_eq!(
            outcome,
            RedemptionOutcome::Delivered {
                token: link.token.clone()
            }
        );
        assert_eq!(fx.transport.texts_to(USER.into()), vec!["Accessing file..."]);
        assert_eq!(fx.transport.media_sent(), vec![(ChatId::from(USER), artifact)]);

        let armed = fx.scheduler.armed();
        assert_eq!(armed.len(), 1);
        assert_eq!(armed[0].0.chat_id, ChatId::from(USER));
        assert_eq!(armed[0].1, DELAY);
    }

    #[tokio::test]
    async fn test_denied_user_sees_every_unmet_channel_and_no_lookup() {
        let fx = Fixture::new(&["@news", "@deals"]);
        fx.transport.set_member_status("@news", USER, MemberStatus::Left);
        let link = fx
            .registry
            .create(MediaArtifact::new("BQAC-doc", MediaKind::Document))
            .await
            .unwrap();
        let reads_before = fx.store.reads();

        let payload = format!("file_{}", link.token);
        let outcome = service(&fx).redeem(&ctx(), Some(&payload)).await;

        assert_eq!(
            outcome,
            RedemptionOutcome::Denied {
                unmet: vec!["@news".to_string(), "@deals".to_string()]
            }
        );
        assert_eq!(fx.store.reads(), reads_before);
        assert!(fx.transport.media_sent().is_empty());

        let (text, keyboard) = fx.transport.last_text().unwrap();
        assert_eq!(text, messages::SUBSCRIBE_PROMPT);
        let buttons: Vec<InlineButton> = keyboard.unwrap().buttons().cloned().collect();
        assert_eq!(
            buttons,
            vec![
                InlineButton::url("Subscribe to @news", "https://t.me/news"),
                InlineButton::url("Subscribe to @deals", "https://t.me/deals"),
            ]
        );
    }

    #[tokio::test]
    async fn test_denied_prompt_names_private_channels() {
        let fx = Fixture::new(&["-1001234567890"]);

        let outcome = service(&fx).redeem(&ctx(), None).await;

        assert!(matches!(outcome, RedemptionOutcome::Denied { .. }));
        let (text, keyboard) = fx.transport.last_text().unwrap();
        assert!(text.contains("-1001234567890"));
        assert_eq!(keyboard.unwrap().buttons().count(), 0);
    }

    #[tokio::test]
    async fn test_denied_plain_start_does_not_greet() {
        let fx = Fixture::new(&["@news"]);
        fx.transport.fail_member_lookup("@news", USER);

        let outcome = service(&fx).redeem(&ctx(), None).await;
        assert!(matches!(outcome, RedemptionOutcome::Denied { .. }));
        assert_eq!(
            fx.transport.texts_to(USER.into()),
            vec![messages::SUBSCRIBE_PROMPT.to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_and_revoked_tokens_look_identical() {
        let fx = Fixture::new(&[]);
        let svc = service(&fx);
        let link = fx
            .registry
            .create(MediaArtifact::new("BQAC-doc", MediaKind::Document))
            .await
            .unwrap();
        fx.registry.revoke(&link.token).await.unwrap();

        let revoked = svc
            .redeem(&ctx(), Some(&format!("file_{}", link.token)))
            .await;
        let revoked_reply = fx.transport.last_text();
        let revoked_calls = fx.transport.calls().len();
        fx.transport.clear_calls();

        let unknown = svc.redeem(&ctx(), Some("file_0000deadbeef")).await;

        assert_eq!(revoked, RedemptionOutcome::Invalid);
        assert_eq!(unknown, RedemptionOutcome::Invalid);
        assert_eq!(revoked_reply, fx.transport.last_text());
        assert_eq!(revoked_calls, fx.transport.calls().len());
        assert_eq!(revoked_reply.unwrap().0, messages::LINK_INVALID);
        assert!(fx.transport.media_sent().is_empty());
        assert!(fx.scheduler.armed().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_invalid() {
        let fx = Fixture::new(&[]);
        let svc = service(&fx);

        for payload in ["file_", "file_not valid", "file_a/b"] {
            assert_eq!(svc.redeem(&ctx(), Some(payload)).await, RedemptionOutcome::Invalid);
        }
        assert_eq!(fx.store.reads(), 0);
    }

    #[tokio::test]
    async fn test_foreign_payload_is_a_plain_entry() {
        let fx = Fixture::new(&[]);
        let svc = service(&fx);

        for payload in ["ref_campaign42", "abc", "revoke_abc", ""] {
            assert_eq!(svc.redeem(&ctx(), Some(payload)).await, RedemptionOutcome::Greeted);
        }
        assert_eq!(fx.store.reads(), 0);
        let texts = fx.transport.texts_to(ChatId::from(USER));
        assert_eq!(texts.len(), 4);
        assert!(texts.iter().all(|t| t.starts_with("Hello ")));
    }

    #[tokio::test]
    async fn test_delivery_failure_sends_notice_without_retry() {
        let fx = Fixture::new(&[]);
        fx.transport.set_fail_media(true);
        let link = fx
            .registry
            .create(MediaArtifact::new("AgAC-photo", MediaKind::Photo))
            .await
            .unwrap();

        let outcome = service(&fx)
            .redeem(&ctx(), Some(&format!("file_{}", link.token)))
            .await;

        assert_eq!(
            outcome,
            RedemptionOutcome::DeliveryFailed {
                token: link.token.clone()
            }
        );
        assert_eq!(
            fx.transport.texts_to(USER.into()),
            vec![messages::ACCESSING_FILE, messages::DELIVERY_FAILED]
        );
        assert!(fx.scheduler.armed().is_empty());
        let still_valid = fx.registry.resolve(&link.token).await.unwrap().unwrap();
        assert!(!still_valid.revoked);
    }

    #[tokio::test]
    async fn test_links_are_reusable_until_revoked() {
        let fx = Fixture::new(&[]);
        let svc = service(&fx);
        let link = fx
            .registry
            .create(MediaArtifact::new("BAAC-video", MediaKind::Video))
            .await
            .unwrap();
        let payload = format!("file_{}", link.token);

        for _ in 0..2 {
            assert!(matches!(
                svc.redeem(&ctx(), Some(&payload)).await,
                RedemptionOutcome::Delivered { .. }
            ));
        }
        fx.registry.revoke(&link.token).await.unwrap();
        assert_eq!(svc.redeem(&ctx(), Some(&payload)).await, RedemptionOutcome::Invalid);
        assert_eq!(fx.transport.media_sent().len(), 2);
    }

    #[tokio::test]
    async fn test_delivered_message_is_the_one_armed() {
        let fx = Fixture::new(&[]);
        let link = fx
            .registry
            .create(MediaArtifact::new("BQAC-doc", MediaKind::Document))
            .await
            .unwrap();

        service(&fx)
            .redeem(&ctx(), Some(&format!("file_{}", link.token)))
            .await;

        let media_id = fx.transport.calls().into_iter().find_map(|c| match c {
            TransportCall::SendText { message_id, .. } => Some(MessageId(message_id.get() + 1)),
            _ => None,
        });
        assert_eq!(fx.scheduler.armed()[0].0.message_id, media_id.unwrap());
    }
}
