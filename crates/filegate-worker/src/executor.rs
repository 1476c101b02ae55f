//! Job execution errors.

/// Error from job execution
#[derive(Debug, thiserror::Error)]
pub enum JobExecutionError {
    /// Permanent failure, do not retry
    #[error("Permanent job failure: {0}")]
    Permanent(String),

    /// Transient failure
    #[error("Transient job failure: {0}")]
    Transient(String),
}

impl JobExecutionError {
    /// Short label for log fields.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Permanent(_) => "permanent",
            Self::Transient(_) => "transient",
        }
    }
}
