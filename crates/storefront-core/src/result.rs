//! Crate-wide result alias.

use crate::error::AppError;

/// Result of any fallible admin-service operation.
///
/// Repositories, auth components, and services all return this, so error
/// propagation is a plain `?` everywhere above the storage layer. The role
/// resolution path is the one deliberate exception: it converts failures
/// into a reduced role set instead of returning them.
pub type AppResult<T> = Result<T, AppError>;
