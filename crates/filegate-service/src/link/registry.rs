//! Link registry: the authoritative token-to-artifact mapping.

use std::sync::Arc;

use tracing::{info, warn};

use filegate_core::error::{AppError, ErrorKind};
use filegate_core::result::AppResult;
use filegate_core::types::MediaArtifact;
use filegate_database::repositories::FileLinkStore;
use filegate_entity::link::{CreateFileLink, FileLink, LinkToken};

/// Attempts at minting a token that is not already taken.
const MAX_MINT_ATTEMPTS: usize = 3;

/// Result of a revoke call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeResult {
    /// The link exists and is now revoked (it may already have been).
    Revoked,
    /// No link has this token.
    NotFound,
}

/// Creates, resolves and revokes file links.
///
/// Keyed solely by token; the registry knows nothing about users.
#[derive(Debug, Clone)]
pub struct LinkRegistry {
    store: Arc<dyn FileLinkStore>,
}

impl LinkRegistry {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<dyn FileLinkStore>) -> Self {
        Self { store }
    }

    /// Mint a new unrevoked link for `artifact`.
    ///
    /// Every call produces a fresh token, so uploading the same artifact
    /// twice yields two independent links.
    pub async fn create(&self, artifact: MediaArtifact) -> AppResult<FileLink> {
        let mut last_conflict = None;
        for _ in 0..MAX_MINT_ATTEMPTS {
            let data = CreateFileLink::new(artifact.clone());
            match self.store.insert(&data).await {
                Ok(link) => {
                    info!(
                        token = %link.token,
                        media_kind = %link.media_kind,
                        "File link created"
                    );
                    return Ok(link);
                }
                Err(e) if e.is(ErrorKind::Conflict) => {
                    warn!(token = %data.token, "Token collision, minting another");
                    last_conflict = Some(e);
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_conflict.unwrap_or_else(|| AppError::conflict("Could not mint a unique token")))
    }

    /// Look up a link. Never mutates.
    pub async fn resolve(&self, token: &LinkToken) -> AppResult<Option<FileLink>> {
        self.store.find_by_token(token).await
    }

    /// Revoke a link. Idempotent.
    pub async fn revoke(&self, token: &LinkToken) -> AppResult<RevokeResult> {
        if self.store.mark_revoked(token).await? {
            info!(token = %token, "File link revoked");
            Ok(RevokeResult::Revoked)
        } else {
            Ok(RevokeResult::NotFound)
        }
    }

    /// Most recently created links, newest first.
    pub async fn recent(&self, limit: u32) -> AppResult<Vec<FileLink>> {
        self.store.list_recent(limit).await
    }
}
