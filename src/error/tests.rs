//! Error type tests
//!
//! Tests for ClaudexError enum and its conversions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::error::ClaudexError;
use crate::error::cli::unknown_shell;
use crate::error::config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
use crate::error::fs::{io_error, read_failed as file_read_failed};
use crate::error::marketplace::{
    invalid as marketplace_invalid, not_found as marketplace_not_found,
    parse_failed as marketplace_parse_failed,
};
use crate::error::skills::{no_skill_root, target_not_directory};
use crate::error::workspace::root_not_found;
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = marketplace_not_found("/repo/.claude-plugin/marketplace.json");
    assert_eq!(
        err.to_string(),
        "marketplace.json not found at /repo/.claude-plugin/marketplace.json"
    );
}

#[test]
fn test_error_code() {
    let err = marketplace_not_found("x");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("claudex::marketplace::not_found".to_string())
    );
}

#[test]
fn test_error_help_present() {
    let err = root_not_found("/nowhere");
    assert!(err.help().is_some());
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ClaudexError = io_err.into();
    assert!(matches!(err, ClaudexError::IoError { .. }));
}

test_error_contains!(
    test_marketplace_parse_failed,
    marketplace_parse_failed("m.json", "expected value at line 1"),
    "Invalid JSON in marketplace.json",
    "expected value"
);

test_error_contains!(
    test_marketplace_invalid,
    marketplace_invalid("top-level value must be an object"),
    "Invalid marketplace.json",
    "must be an object"
);

test_error_contains!(
    test_no_skill_root,
    no_skill_root("/repo"),
    "Neither plugins/ nor skills/"
);

test_error_contains!(
    test_target_not_directory,
    target_not_directory("/repo/README.md"),
    "is not a directory"
);

test_error_contains!(
    test_config_parse_failed,
    config_parse_failed("claudex.yaml", "unknown field `limts`"),
    "Failed to parse configuration file",
    "limts"
);

test_error_contains!(
    test_config_read_failed,
    config_read_failed("claudex.yaml", "permission denied"),
    "Failed to read configuration file"
);

test_error_contains!(
    test_file_read_failed,
    file_read_failed("SKILL.md", "permission denied"),
    "Failed to read file",
    "permission denied"
);

test_error_contains!(test_io_error, io_error("some error"), "IO error");

test_error_contains!(
    test_root_not_found,
    root_not_found("/nowhere"),
    "Repository root not found"
);

test_error_contains!(test_unknown_shell_message, unknown_shell("tcsh"), "Unknown shell", "tcsh");
