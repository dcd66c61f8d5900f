//! Marketplace loading errors

use super::ClaudexError;

/// Creates a marketplace not found error
pub fn not_found(path: impl Into<String>) -> ClaudexError {
    ClaudexError::MarketplaceNotFound { path: path.into() }
}

/// Creates a marketplace parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ClaudexError {
    ClaudexError::MarketplaceParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid marketplace error
pub fn invalid(message: impl Into<String>) -> ClaudexError {
    ClaudexError::MarketplaceInvalid {
        message: message.into(),
    }
}
