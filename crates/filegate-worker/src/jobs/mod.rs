//! Built-in job implementations.

pub mod cleanup;

pub use cleanup::MessageCleanupJob;
