//! Deliverable media references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Kind of media an artifact reference points at. Selects the send method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Arbitrary file.
    Document,
    /// Compressed photo.
    Photo,
    /// Video.
    Video,
}

impl MediaKind {
    /// Stable lowercase name, also used as the stored column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(Self::Document),
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            other => Err(AppError::validation(format!("Unknown media kind '{other}'"))),
        }
    }
}

impl TryFrom<String> for MediaKind {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A transport-specific file id plus the kind needed to re-send it.
///
/// The file id is opaque to the core and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaArtifact {
    /// Transport file identifier.
    pub file_id: String,
    /// Media kind.
    pub kind: MediaKind,
}

impl MediaArtifact {
    /// Create an artifact reference.
    pub fn new(file_id: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            file_id: file_id.into(),
            kind,
        }
    }
}
