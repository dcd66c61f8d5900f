//! Skill discovery errors

use super::ClaudexError;

/// Creates a missing skill root error
pub fn no_skill_root(path: impl Into<String>) -> ClaudexError {
    ClaudexError::NoSkillRoot { path: path.into() }
}

/// Creates a target-is-not-a-directory error
pub fn target_not_directory(path: impl Into<String>) -> ClaudexError {
    ClaudexError::TargetNotDirectory { path: path.into() }
}
