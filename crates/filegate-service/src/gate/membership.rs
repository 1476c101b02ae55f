//! Membership checks against the configured channel list.

use std::sync::Arc;

use tracing::{debug, warn};

use filegate_core::config::GateConfig;
use filegate_core::traits::ChatTransport;
use filegate_core::types::UserId;

/// Result of a gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Every configured channel is satisfied.
    Allowed,
    /// At least one channel is not satisfied.
    Denied {
        /// The first failing channel followed by every channel after it,
        /// in configuration order.
        unmet: Vec<String>,
    },
}

impl AccessDecision {
    /// Whether access was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decides whether a user belongs to every required channel.
///
/// The gate fails closed: any status other than member, administrator or
/// creator, and any transport failure, denies access. Nothing is cached.
#[derive(Debug, Clone)]
pub struct MembershipGate {
    transport: Arc<dyn ChatTransport>,
    channels: Arc<[String]>,
}

impl MembershipGate {
    /// Creates a gate over the configured channels.
    pub fn new(transport: Arc<dyn ChatTransport>, config: &GateConfig) -> Self {
        Self {
            transport,
            channels: config.channels.iter().map(|c| c.trim().to_string()).collect(),
        }
    }

    /// Configured channels in check order.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Check `user` against every channel, stopping at the first failure.
    pub async fn check_access(&self, user: UserId) -> AccessDecision {
        for (index, channel) in self.channels.iter().enumerate() {
            let satisfied = match self.transport.get_chat_member_status(channel, user).await {
                Ok(status) => {
                    debug!(user_id = %user, channel = %channel, status = %status, "Membership checked");
                    status.is_subscribed()
                }
                Err(e) => {
                    warn!(
                        user_id = %user,
                        channel = %channel,
                        error = %e,
                        "Membership lookup failed, denying access"
                    );
                    false
                }
            };

            if !satisfied {
                return AccessDecision::Denied {
                    unmet: self.channels[index..].to_vec(),
                };
            }
        }

        AccessDecision::Allowed
    }
}
