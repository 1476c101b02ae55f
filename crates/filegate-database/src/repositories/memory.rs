//! In-memory file link store backed by a `DashMap`.
//!
//! Suitable for single-node deployments without a database and for tests.
//! Links are lost when the process exits.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use filegate_core::error::AppError;
use filegate_core::result::AppResult;
use filegate_entity::link::{CreateFileLink, FileLink, LinkToken};

use super::FileLinkStore;

/// Process-local link store.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileLinkStore {
    links: Arc<DashMap<LinkToken, FileLink>>,
}

impl MemoryFileLinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the store holds no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl FileLinkStore for MemoryFileLinkStore {
    async fn insert(&self, data: &CreateFileLink) -> AppResult<FileLink> {
        match self.links.entry(data.token.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Link token '{}' already exists",
                data.token
            ))),
            Entry::Vacant(slot) => {
                let link = data.clone().into_link();
                slot.insert(link.clone());
                debug!(token = %link.token, "Stored file link in memory");
                Ok(link)
            }
        }
    }

    async fn find_by_token(&self, token: &LinkToken) -> AppResult<Option<FileLink>> {
        Ok(self.links.get(token).map(|entry| entry.value().clone()))
    }

    async fn mark_revoked(&self, token: &LinkToken) -> AppResult<bool> {
        match self.links.get_mut(token) {
            Some(mut entry) => {
                entry.revoked = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_recent(&self, limit: u32) -> AppResult<Vec<FileLink>> {
        let mut links: Vec<FileLink> = self.links.iter().map(|e| e.value().clone()).collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        links.truncate(limit as usize);
        Ok(links)
    }
}
