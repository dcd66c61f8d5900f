//! CLI integration tests using the REAL claudex binary

mod common;

use common::{TestRepo, claudex_cmd};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    claudex_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate-marketplace"))
        .stdout(predicate::str::contains("validate-skills"))
        .stdout(predicate::str::contains("pre-release"))
        .stdout(predicate::str::contains("--root"));
}

#[test]
fn test_version_output() {
    claudex_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("claudex"))
        .stdout(predicate::str::contains(".claude-plugin/marketplace.json"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_version_flag() {
    claudex_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    claudex_cmd().assert().failure();
}

#[test]
fn test_unknown_format_rejected() {
    claudex_cmd()
        .args(["--format", "xml", "validate-skills"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_completions_bash() {
    claudex_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("claudex"));
}

#[test]
fn test_completions_unknown_shell() {
    claudex_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_root_flag_from_elsewhere() {
    let repo = TestRepo::valid();
    let elsewhere = TestRepo::new();
    claudex_cmd()
        .current_dir(&elsewhere.path)
        .arg("--root")
        .arg(&repo.path)
        .arg("validate-marketplace")
        .assert()
        .success();
}

#[test]
fn test_root_from_env() {
    let repo = TestRepo::valid();
    let elsewhere = TestRepo::new();
    claudex_cmd()
        .current_dir(&elsewhere.path)
        .env("CLAUDEX_ROOT", &repo.path)
        .arg("validate-marketplace")
        .assert()
        .success();
}

#[test]
fn test_root_discovered_from_subdirectory() {
    let repo = TestRepo::valid();
    claudex_cmd()
        .current_dir(repo.path.join("plugins/analysis"))
        .arg("validate-marketplace")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation passed"));
}

#[test]
fn test_missing_root_is_diagnostic() {
    claudex_cmd()
        .args(["--root", "/definitely/not/a/real/dir", "validate-skills"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Repository root not found"));
}

#[test]
fn test_invalid_config_is_diagnostic() {
    let repo = TestRepo::valid();
    repo.write_file("claudex.yaml", "limts:\n  pass_score: 10\n");
    repo.cmd()
        .arg("validate-skills")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_config_limits_apply() {
    let repo = TestRepo::valid();
    repo.write_file("claudex.yaml", "limits:\n  max_description_length: 60\n");
    repo.cmd()
        .arg("validate-skills")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Description exceeds length limit"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let repo = TestRepo::valid();
    repo.cmd()
        .args(["-v", "validate-marketplace"])
        .assert()
        .success()
        .stderr(predicate::str::contains("validating marketplace"));
}
