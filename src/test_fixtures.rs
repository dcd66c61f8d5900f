//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Builds small marketplace repositories in temp directories:
//!
//! ```ignore
//! use crate::test_fixtures::{create_marketplace_repo, create_skill};
//!
//! #[test]
//! fn my_test() {
//!     // Valid repository with one plugin and one skill
//!     let temp = create_marketplace_repo();
//!
//!     // Another well-formed skill
//!     create_skill(temp.path(), "skills/extra-skill");
//! }
//! ```

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Plugin and skill names used by [`create_marketplace_repo`]
pub const PLUGIN_NAME: &str = "analysis";
pub const SKILL_NAME: &str = "codebase-auditor";
pub const SKILL_PATH: &str = "./plugins/analysis/skills/codebase-auditor";

/// Description that satisfies every description quality check
pub const GOOD_DESCRIPTION: &str = "Use PROACTIVELY when auditing a codebase for quality issues. \
    Analyzes source files and generates a prioritized report. Not for runtime profiling.";

/// Returns a directory path suitable for creating temporary directories.
///
/// Never returns a relative path, so temp dirs are never created under the
/// current working directory (e.g. when `TMPDIR=tmp`).
fn temp_dir_base() -> PathBuf {
    let t = std::env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Write a file relative to `root`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(root: &Path, path: &str, content: &str) -> PathBuf {
    let full_path = root.join(path);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&full_path, content).expect("Failed to write test file");
    full_path
}

/// SKILL.md content scoring 100 in every category
#[must_use]
pub fn skill_md(name: &str, description: &str) -> String {
    format!(
        "---\nname: {name}\ndescription: {description}\nversion: 1.0.0\n---\n\n\
         # {name}\n\n\
         ## Overview\n\n\
         Audits a codebase and reports findings grouped by severity.\n\n\
         ## When to Use\n\n\
         Trigger phrases:\n\
         - \"audit my codebase\"\n\
         - \"review code quality\"\n\n\
         ## Examples\n\n\
         ```\n\
         audit my codebase\n\
         ```\n\n\
         ## Limitations\n\n\
         Not for runtime profiling.\n"
    )
}

/// Create a well-formed skill directory at `rel_dir` under `root`.
///
/// The frontmatter `name` is the last component of `rel_dir`.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn create_skill(root: &Path, rel_dir: &str) -> PathBuf {
    let name = rel_dir.rsplit('/').next().unwrap_or(rel_dir);
    write_file(
        root,
        &format!("{rel_dir}/SKILL.md"),
        &skill_md(name, GOOD_DESCRIPTION),
    );
    write_file(
        root,
        &format!("{rel_dir}/README.md"),
        &format!("# {name}\n\nInstallation and usage notes.\n"),
    );
    write_file(
        root,
        &format!("{rel_dir}/CHANGELOG.md"),
        "# Changelog\n\n## 1.0.0\n\n- Initial release with codebase audit workflow\n",
    );
    root.join(rel_dir)
}

/// Marketplace document listing one plugin with one skill
#[must_use]
pub fn marketplace_json() -> Value {
    json!({
        "name": "claudex",
        "owner": {"name": "Claudex Maintainers", "email": "maintainers@example.com"},
        "metadata": {"description": "Skill marketplace", "version": "1.0.0"},
        "plugins": [
            {
                "name": PLUGIN_NAME,
                "description": "Code analysis skills",
                "source": "./plugins/analysis",
                "strict": false,
                "skills": [SKILL_PATH]
            }
        ]
    })
}

/// Write `.claude-plugin/marketplace.json` under `root`.
///
/// # Panics
///
/// Panics if the value cannot be serialized or written.
pub fn write_marketplace(root: &Path, value: &Value) -> PathBuf {
    let content = serde_json::to_string_pretty(value).expect("Failed to serialize marketplace");
    write_file(root, crate::config::MARKETPLACE_JSON, &content)
}

/// Create a temp repository that passes every validator.
///
/// # Panics
///
/// Panics if any step fails.
#[must_use]
pub fn create_marketplace_repo() -> TempDir {
    let temp = create_temp_dir();
    create_skill(temp.path(), SKILL_PATH.trim_start_matches("./"));
    write_marketplace(temp.path(), &marketplace_json());
    temp
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_skill_layout() {
        let temp = create_temp_dir();
        let dir = create_skill(temp.path(), "skills/my-skill");
        assert!(dir.join("SKILL.md").is_file());
        assert!(dir.join("README.md").is_file());
        assert!(dir.join("CHANGELOG.md").is_file());
        let content = std::fs::read_to_string(dir.join("SKILL.md")).expect("read");
        assert!(content.starts_with("---\nname: my-skill\n"));
    }

    #[test]
    fn test_create_marketplace_repo() {
        let temp = create_marketplace_repo();
        assert!(temp.path().join(crate::config::MARKETPLACE_JSON).is_file());
        assert!(temp.path().join(SKILL_PATH).join("SKILL.md").is_file());
    }
}
