//! Deferred cleanup of bot messages for FileGate.
//!
//! This crate provides:
//! - An expiry scheduler that arms one-shot jobs on a shared
//!   `tokio-cron-scheduler` instance
//! - The job that deletes a delivered or confirmation message when it fires

pub mod executor;
pub mod jobs;
pub mod scheduler;

pub use executor::JobExecutionError;
pub use jobs::MessageCleanupJob;
pub use scheduler::ExpiryScheduler;
