//! Shared value types passed between the transport and the core.

pub mod id;
pub mod keyboard;
pub mod media;
pub mod membership;

pub use id::{ChatId, MessageId, MessageRef, UserId};
pub use keyboard::{InlineButton, InlineKeyboard};
pub use media::{MediaArtifact, MediaKind};
pub use membership::MemberStatus;
