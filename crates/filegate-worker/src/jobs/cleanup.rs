//! Message cleanup job.

use std::sync::Arc;

use filegate_core::error::AppError;
use filegate_core::traits::ChatTransport;
use filegate_core::types::MessageRef;

use crate::executor::JobExecutionError;

/// Deletes a previously sent bot message.
#[derive(Debug, Clone)]
pub struct MessageCleanupJob {
    transport: Arc<dyn ChatTransport>,
}

impl MessageCleanupJob {
    /// Create a cleanup job over the given transport.
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self { transport }
    }

    /// Delete `message`.
    ///
    /// A message the user already removed is a permanent failure; anything
    /// else the transport reports is transient. Neither is retried.
    pub async fn execute(&self, message: MessageRef) -> Result<(), JobExecutionError> {
        self.transport
            .delete_message(message)
            .await
            .map_err(classify)
    }

    /// Run the job, logging and discarding any failure.
    pub async fn run(&self, message: MessageRef) {
        match self.execute(message).await {
            Ok(()) => tracing::debug!(message = %message, "Cleaned up message"),
            Err(e) => tracing::debug!(
                message = %message,
                failure = e.class(),
                error = %e,
                "Message cleanup skipped"
            ),
        }
    }
}

/// The Bot API reports an already removed message as "message to delete not found".
fn classify(err: AppError) -> JobExecutionError {
    if err.message.contains("not found") {
        JobExecutionError::Permanent(err.to_string())
    } else {
        JobExecutionError::Transient(err.to_string())
    }
}
