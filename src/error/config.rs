//! Configuration errors

use super::ClaudexError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ClaudexError {
    ClaudexError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ClaudexError {
    ClaudexError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
