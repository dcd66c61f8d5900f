//! File system errors

use super::ClaudexError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ClaudexError {
    ClaudexError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ClaudexError {
    ClaudexError::IoError {
        message: message.into(),
    }
}
