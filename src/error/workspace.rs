//! Workspace errors

use super::ClaudexError;

/// Creates a repository root not found error
pub fn root_not_found(path: impl Into<String>) -> ClaudexError {
    ClaudexError::RootNotFound { path: path.into() }
}
