//! Convenience result type alias for Taskboard.

use crate::error::AppError;

/// A specialized `Result` type for Taskboard operations.
pub type AppResult<T> = Result<T, AppError>;
