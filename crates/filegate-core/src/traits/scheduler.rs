//! Deferred message cleanup trait.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::MessageRef;

/// Arms one-shot deletion of a message after a delay.
///
/// Implemented by `filegate-worker`. Arming is fire-and-forget: once armed,
/// the deletion runs at most once, its failure is swallowed, and nothing is
/// persisted across restarts. An `Err` only means the job could not be
/// registered at all.
#[async_trait]
pub trait CleanupScheduler: Send + Sync + std::fmt::Debug + 'static {
    /// Delete `message` once `delay` has elapsed.
    async fn arm(&self, message: MessageRef, delay: Duration) -> AppResult<()>;
}
