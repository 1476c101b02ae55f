//! # filegate-core
//!
//! Core crate for FileGate. Contains the transport trait, configuration
//! schemas, chat/media value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FileGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
