//! Opaque link tokens.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use filegate_core::error::AppError;

/// Opaque identifier of a [`FileLink`](super::FileLink).
///
/// Tokens travel inside `/start file_<token>` deep links (64 chars max) and
/// `revoke_<token>` callback payloads (64 bytes max), so they are limited to
/// [`LinkToken::MAX_LEN`] characters from `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkToken(String);

impl LinkToken {
    /// Longest token that fits both payload formats.
    pub const MAX_LEN: usize = 57;

    /// Mint a fresh random token (32 lowercase hex characters).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Validate and wrap an existing token string.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() {
            return Err(AppError::validation("Link token is empty"));
        }
        if raw.len() > Self::MAX_LEN {
            return Err(AppError::validation(format!(
                "Link token exceeds {} characters",
                Self::MAX_LEN
            )));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::validation(
                "Link token contains invalid characters",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// Borrow the token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LinkToken {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LinkToken> for String {
    fn from(token: LinkToken) -> Self {
        token.0
    }
}

impl AsRef<str> for LinkToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
