//! Channel membership status as reported by the transport.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a user inside a chat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Chat owner.
    Creator,
    /// Chat administrator.
    Administrator,
    /// Regular member.
    Member,
    /// Restricted member.
    Restricted,
    /// Left the chat.
    Left,
    /// Banned from the chat.
    Kicked,
    /// Any status this build does not know about.
    #[serde(other)]
    Unknown,
}

impl MemberStatus {
    /// Whether the status counts as being subscribed to the chat.
    pub fn is_subscribed(&self) -> bool {
        matches!(self, Self::Creator | Self::Administrator | Self::Member)
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Administrator => "administrator",
            Self::Member => "member",
            Self::Restricted => "restricted",
            Self::Left => "left",
            Self::Kicked => "kicked",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
