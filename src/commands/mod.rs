//! Command implementations for the Claudex CLI
//!
//! Each validation command returns an [`Outcome`]; `main` turns a failed
//! outcome into exit code 1.

pub mod completions;
pub mod helpers;
pub mod pre_release;
pub mod validate_marketplace;
pub mod validate_skills;
pub mod version;

/// Whether a validation command found the repository acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Outcome::Passed } else { Outcome::Failed }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }
}
