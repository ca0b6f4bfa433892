//! Convenience result type alias for MovieDB.

use crate::error::AppError;

/// A specialized `Result` type for MovieDB operations.
pub type AppResult<T> = Result<T, AppError>;
