//! validate-skills integration tests

mod common;

use common::{GOOD_DESCRIPTION, TestRepo, skill_md};
use predicates::prelude::*;

#[test]
fn test_all_skills_pass() {
    let repo = TestRepo::valid();
    repo.cmd()
        .arg("validate-skills")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PASS A (100%) plugins/analysis/skills/codebase-auditor",
        ))
        .stdout(predicate::str::contains("Passed:        1/1"))
        .stdout(predicate::str::contains("All skills passed validation!"));
}

#[test]
fn test_flat_skills_layout() {
    let repo = TestRepo::new();
    repo.create_skill("skills/git/commit-helper");
    repo.cmd()
        .arg("validate-skills")
        .assert()
        .success()
        .stdout(predicate::str::contains("skills/git/commit-helper"));
}

#[test]
fn test_no_skill_root_fails() {
    let repo = TestRepo::new();
    repo.cmd()
        .arg("validate-skills")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Neither plugins/ nor skills/ directory found"));
}

#[test]
fn test_empty_skill_root_passes() {
    let repo = TestRepo::new();
    std::fs::create_dir_all(repo.path.join("skills")).expect("mkdir");
    repo.cmd()
        .arg("validate-skills")
        .assert()
        .success()
        .stdout(predicate::str::contains("No skills found to validate"));
}

#[test]
fn test_name_mismatch_fails() {
    let repo = TestRepo::valid();
    repo.write_file(
        "plugins/analysis/skills/codebase-auditor/SKILL.md",
        &skill_md("auditor", GOOD_DESCRIPTION),
    );
    repo.cmd()
        .arg("validate-skills")
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains(
            "Name 'auditor' does not match directory 'codebase-auditor'",
        ))
        .stdout(predicate::str::contains("1 skill(s) failed validation"));
}

#[test]
fn test_missing_frontmatter_fails() {
    let repo = TestRepo::valid();
    repo.write_file(
        "plugins/analysis/skills/codebase-auditor/SKILL.md",
        "# Auditor\n\nNo frontmatter here.\n",
    );
    repo.cmd()
        .arg("validate-skills")
        .assert()
        .failure()
        .stdout(predicate::str::contains("SKILL.md must start with YAML frontmatter"));
}

#[test]
fn test_target_single_skill() {
    let repo = TestRepo::valid();
    repo.create_skill("plugins/analysis/skills/other-skill");
    repo.write_file(
        "plugins/analysis/skills/other-skill/SKILL.md",
        &skill_md("wrong-name", GOOD_DESCRIPTION),
    );

    repo.cmd()
        .args(["validate-skills", "plugins/analysis/skills/codebase-auditor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total skills:  1"));
}

#[test]
fn test_target_not_a_directory() {
    let repo = TestRepo::valid();
    repo.cmd()
        .args(["validate-skills", "plugins/analysis/skills/codebase-auditor/SKILL.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_missing_readme_strict_only() {
    let repo = TestRepo::valid();
    repo.remove_file("plugins/analysis/skills/codebase-auditor/README.md");

    repo.cmd().arg("validate-skills").assert().success();

    repo.cmd()
        .args(["validate-skills", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing required file: README.md"));
}

#[test]
fn test_verbose_shows_info() {
    let repo = TestRepo::valid();
    repo.cmd()
        .args(["-v", "validate-skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ℹ Optional frontmatter fields: version"));
}

#[test]
fn test_json_output() {
    let repo = TestRepo::valid();
    let output = repo
        .cmd()
        .args(["--format", "json", "validate-skills"])
        .output()
        .expect("run claudex");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["passed"], 1);
    assert_eq!(value["skills"][0]["grade"], "A");
    assert_eq!(value["skills"][0]["path"], "plugins/analysis/skills/codebase-auditor");
}
