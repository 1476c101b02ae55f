//! Newtype wrappers around the integer identifiers used by the Bot API.
//!
//! Using distinct types prevents accidentally passing a `UserId` where a
//! `ChatId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Return the raw integer value.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(
    /// Telegram user identifier.
    UserId
);

define_id!(
    /// Telegram chat identifier (private chat, group, or channel).
    ChatId
);

define_id!(
    /// Message identifier, unique within a chat.
    MessageId
);

impl From<UserId> for ChatId {
    /// A user's private chat with the bot shares the user's id.
    fn from(user: UserId) -> Self {
        Self(user.0)
    }
}

/// Fully-qualified reference to a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRef {
    /// Chat holding the message.
    pub chat_id: ChatId,
    /// Message within that chat.
    pub message_id: MessageId,
}

impl MessageRef {
    /// Build a reference from its parts.
    pub fn new(chat_id: ChatId, message_id: MessageId) -> Self {
        Self {
            chat_id,
            message_id,
        }
    }
}

impl fmt::Display for MessageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chat_id, self.message_id)
    }
}
