//! One-shot expiry scheduler for bot messages.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_cron_scheduler::{Job, JobScheduler};

use filegate_core::error::{AppError, ErrorKind};
use filegate_core::result::AppResult;
use filegate_core::traits::{ChatTransport, CleanupScheduler};
use filegate_core::types::MessageRef;

use crate::jobs::MessageCleanupJob;

/// Arms delayed message deletions on an in-process job scheduler.
///
/// Jobs live only in memory; anything armed before a restart is lost.
#[derive(Clone)]
pub struct ExpiryScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Job run when an armed delay elapses
    cleanup: Arc<MessageCleanupJob>,
}

impl std::fmt::Debug for ExpiryScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiryScheduler").finish()
    }
}

impl ExpiryScheduler {
    /// Create a scheduler that deletes messages through `transport`.
    pub async fn new(transport: Arc<dyn ChatTransport>) -> AppResult<Self> {
        let scheduler = JobScheduler::new().await.map_err(|e| {
            AppError::with_source(ErrorKind::Scheduler, "Failed to create scheduler", e)
        })?;

        Ok(Self {
            scheduler,
            cleanup: Arc::new(MessageCleanupJob::new(transport)),
        })
    }

    /// Start the scheduler
    pub async fn start(&self) -> AppResult<()> {
        self.scheduler.start().await.map_err(|e| {
            AppError::with_source(ErrorKind::Scheduler, "Failed to start scheduler", e)
        })?;

        tracing::info!("Expiry scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler. Pending deletions are dropped.
    pub async fn shutdown(&self) -> AppResult<()> {
        let mut scheduler = self.scheduler.clone();
        scheduler.shutdown().await.map_err(|e| {
            AppError::with_source(ErrorKind::Scheduler, "Failed to shutdown scheduler", e)
        })?;

        tracing::info!("Expiry scheduler shut down");
        Ok(())
    }
}

#[async_trait]
impl CleanupScheduler for ExpiryScheduler {
    async fn arm(&self, message: MessageRef, delay: Duration) -> AppResult<()> {
        let cleanup = Arc::clone(&self.cleanup);
        let job = Job::new_one_shot_async(delay, move |_uuid, _lock| {
            let cleanup = Arc::clone(&cleanup);
            Box::pin(async move {
                cleanup.run(message).await;
            })
        })
        .map_err(|e| {
            AppError::with_source(ErrorKind::Scheduler, "Failed to create cleanup job", e)
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::with_source(ErrorKind::Scheduler, "Failed to add cleanup job", e)
        })?;

        tracing::debug!(message = %message, delay_secs = delay.as_secs(), "Armed message cleanup");
        Ok(())
    }
}
