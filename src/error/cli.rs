//! Command line errors

use super::ClaudexError;

/// Creates an unknown shell error
pub fn unknown_shell(shell: impl Into<String>) -> ClaudexError {
    ClaudexError::UnknownShell {
        shell: shell.into(),
    }
}
