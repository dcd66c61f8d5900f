//! Error types and handling for Claudex
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Validation findings are not errors: a marketplace with a missing skill
//! directory is reported through [`crate::report::Report`]. The variants here
//! cover conditions that stop a validator from running at all.
//!
//! This module is organized into sub-modules by error domain:
//! - [`cli`]: Command line errors
//! - [`config`]: `claudex.yaml` errors
//! - [`fs`]: File system errors
//! - [`marketplace`]: `marketplace.json` loading errors
//! - [`skills`]: Skill discovery errors
//! - [`workspace`]: Repository root errors

pub mod cli;
pub mod config;
pub mod fs;
pub mod marketplace;
pub mod skills;
pub mod workspace;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Claudex operations
#[derive(Error, Diagnostic, Debug)]
pub enum ClaudexError {
    // Workspace errors
    #[error("Repository root not found: {path}")]
    #[diagnostic(
        code(claudex::workspace::root_not_found),
        help("Pass an existing directory with --root or set CLAUDEX_ROOT")
    )]
    RootNotFound { path: String },

    // Marketplace errors
    #[error("marketplace.json not found at {path}")]
    #[diagnostic(
        code(claudex::marketplace::not_found),
        help("The registry is expected at .claude-plugin/marketplace.json under the repository root")
    )]
    MarketplaceNotFound { path: String },

    #[error("Invalid JSON in marketplace.json: {reason}")]
    #[diagnostic(code(claudex::marketplace::parse_failed))]
    MarketplaceParseFailed { path: String, reason: String },

    #[error("Invalid marketplace.json: {message}")]
    #[diagnostic(code(claudex::marketplace::invalid))]
    MarketplaceInvalid { message: String },

    // Skill discovery errors
    #[error("Neither plugins/ nor skills/ directory found under {path}")]
    #[diagnostic(
        code(claudex::skills::no_skill_root),
        help("Skills live under plugins/<plugin>/skills/ or skills/")
    )]
    NoSkillRoot { path: String },

    #[error("{path} is not a directory")]
    #[diagnostic(code(claudex::skills::target_not_directory))]
    TargetNotDirectory { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(claudex::config::parse_failed),
        help("Valid top-level keys in claudex.yaml: limits, required_files")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(claudex::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(claudex::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(claudex::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(claudex::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Logging errors
    #[error("Failed to initialize logging: {reason}")]
    #[diagnostic(code(claudex::logging::init_failed))]
    LoggingInitFailed { reason: String },
}

impl From<std::io::Error> for ClaudexError {
    fn from(err: std::io::Error) -> Self {
        ClaudexError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ClaudexError>;
