//! Long-polling update loop.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Semaphore, watch};
use tokio::task::JoinSet;
use tokio::time;

use filegate_core::config::BotConfig;

use crate::client::BotApiClient;
use crate::types::Update;

/// Receives every update fetched by the poller.
///
/// Handlers own their error handling: the poller only logs panics.
#[async_trait]
pub trait UpdateHandler: Send + Sync + 'static {
    /// Process a single update.
    async fn handle(&self, update: Update);
}

/// Fetches updates with `getUpdates` and runs each on its own task.
#[derive(Debug)]
pub struct UpdatePoller {
    client: Arc<BotApiClient>,
    poll_timeout_seconds: u64,
    retry_backoff: Duration,
    max_concurrent: usize,
}

impl UpdatePoller {
    /// Create a poller using the polling settings from `config`.
    pub fn new(client: Arc<BotApiClient>, config: &BotConfig) -> Self {
        Self {
            client,
            poll_timeout_seconds: config.poll_timeout_seconds,
            retry_backoff: Duration::from_secs(config.retry_backoff_seconds),
            max_concurrent: config.max_concurrent_updates.max(1),
        }
    }

    /// Poll until the cancel signal flips to `true`, then wait for in-flight
    /// handlers to finish.
    pub async fn run(&self, handler: Arc<dyn UpdateHandler>, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            poll_timeout = self.poll_timeout_seconds,
            max_concurrent = self.max_concurrent,
            "Update poller started"
        );

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut in_flight = JoinSet::new();
        let mut offset = 0i64;

        loop {
            let batch = tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!("Update poller received shutdown signal");
                        break;
                    }
                    continue;
                }
                batch = self.client.get_updates(offset, self.poll_timeout_seconds) => batch,
            };

            let updates = match batch {
                Ok(updates) => updates,
                Err(e) => {
                    tracing::warn!(error = %e, "getUpdates failed, backing off");
                    tokio::select! {
                        _ = cancel.changed() => {
                            if *cancel.borrow() {
                                break;
                            }
                        }
                        _ = time::sleep(self.retry_backoff) => {}
                    }
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);

                let permit = match Arc::clone(&semaphore).acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => break,
                };
                let handler = Arc::clone(&handler);
                in_flight.spawn(async move {
                    handler.handle(update).await;
                    drop(permit);
                });
            }

            while let Some(joined) = in_flight.try_join_next() {
                if let Err(e) = joined {
                    tracing::error!(error = %e, "Update handler task panicked");
                }
            }
        }

        tracing::info!(
            pending = in_flight.len(),
            "Waiting for in-flight update handlers to complete..."
        );
        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Update handler task panicked");
            }
        }
        tracing::info!("Update poller stopped");
    }
}
