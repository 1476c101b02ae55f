//! # filegate-database
//!
//! Link store backends for FileGate: PostgreSQL connection management,
//! migrations, and the [`FileLinkStore`] implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::{FileLinkRepository, FileLinkStore, MemoryFileLinkStore};
pub use store::open_store;
