//! Core traits defined in `filegate-core` and implemented by other crates.

pub mod scheduler;
pub mod transport;

pub use scheduler::CleanupScheduler;
pub use transport::{BotIdentity, ChatTransport};
