//! File link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filegate_core::types::{MediaArtifact, MediaKind};

use super::token::LinkToken;

/// A shareable reference to a deliverable media artifact.
///
/// `revoked` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FileLink {
    /// Unique opaque token.
    #[sqlx(try_from = "String")]
    pub token: LinkToken,
    /// Transport file id used to re-deliver the media.
    pub artifact_ref: String,
    /// Kind of media behind `artifact_ref`.
    #[sqlx(try_from = "String")]
    pub media_kind: MediaKind,
    /// Whether the link has been revoked.
    pub revoked: bool,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
}

impl FileLink {
    /// Whether the link may still be redeemed.
    pub fn is_redeemable(&self) -> bool {
        !self.revoked
    }

    /// The artifact to deliver on redemption.
    pub fn artifact(&self) -> MediaArtifact {
        MediaArtifact::new(self.artifact_ref.clone(), self.media_kind)
    }
}

/// Data required to insert a new file link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileLink {
    /// Freshly minted token.
    pub token: LinkToken,
    /// Artifact the link points at.
    pub artifact: MediaArtifact,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl CreateFileLink {
    /// Prepare a new unrevoked link for `artifact` under a fresh token.
    pub fn new(artifact: MediaArtifact) -> Self {
        Self {
            token: LinkToken::generate(),
            artifact,
            created_at: Utc::now(),
        }
    }

    /// The row as it will be stored.
    pub fn into_link(self) -> FileLink {
        FileLink {
            token: self.token,
            artifact_ref: self.artifact.file_id,
            media_kind: self.artifact.kind,
            revoked: false,
            created_at: self.created_at,
        }
    }
}
