//! File link store trait and its implementations.

pub mod link;
pub mod memory;

use async_trait::async_trait;

use filegate_core::result::AppResult;
use filegate_entity::link::{CreateFileLink, FileLink, LinkToken};

pub use link::FileLinkRepository;
pub use memory::MemoryFileLinkStore;

/// Persistence operations the link registry needs.
///
/// Each method is a single atomic store operation. Implementations must give
/// read-your-writes consistency per token: once `mark_revoked` returns, any
/// later `find_by_token` for that token observes `revoked = true`.
#[async_trait]
pub trait FileLinkStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new unrevoked link. Fails with a conflict if the token exists.
    async fn insert(&self, data: &CreateFileLink) -> AppResult<FileLink>;

    /// Point lookup by token.
    async fn find_by_token(&self, token: &LinkToken) -> AppResult<Option<FileLink>>;

    /// Set `revoked = true`. Returns `false` when no record has this token.
    async fn mark_revoked(&self, token: &LinkToken) -> AppResult<bool>;

    /// Most recently created links, newest first.
    async fn list_recent(&self, limit: u32) -> AppResult<Vec<FileLink>>;
}
