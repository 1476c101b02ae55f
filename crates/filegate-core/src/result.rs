//! Convenience result type alias for FileGate.

use crate::error::AppError;

/// A specialized `Result` type for FileGate operations.
pub type AppResult<T> = Result<T, AppError>;
