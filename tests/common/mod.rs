//! Common test utilities for Claudex integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Description that satisfies every description quality check
pub const GOOD_DESCRIPTION: &str = "Use PROACTIVELY when auditing a codebase for quality issues. \
    Analyzes source files and generates a prioritized report. Not for runtime profiling.";

/// Build a `claudex` command that never picks up the caller's environment
#[allow(deprecated)]
pub fn claudex_cmd() -> Command {
    let mut cmd = Command::cargo_bin("claudex").expect("claudex binary should be built");
    cmd.env_remove("CLAUDEX_ROOT").env_remove("RUST_LOG");
    cmd
}

/// A temporary marketplace repository for integration tests
#[allow(dead_code)]
pub struct TestRepo {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to repository root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create an empty repository
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Repository with one plugin group referencing one well-formed skill
    pub fn valid() -> Self {
        let repo = Self::new();
        repo.create_skill("plugins/analysis/skills/codebase-auditor");
        repo.write_marketplace(&marketplace_json(&[(
            "analysis",
            &["./plugins/analysis/skills/codebase-auditor"],
        )]));
        repo
    }

    /// Write a file in the repository
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Remove a file from the repository
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Write `.claude-plugin/marketplace.json`
    pub fn write_marketplace(&self, value: &Value) {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize marketplace");
        self.write_file(".claude-plugin/marketplace.json", &content);
    }

    /// Create a skill directory whose SKILL.md scores 100
    pub fn create_skill(&self, dir: &str) {
        let name = dir.rsplit('/').next().unwrap_or(dir);
        self.write_file(&format!("{dir}/SKILL.md"), &skill_md(name, GOOD_DESCRIPTION));
        self.write_file(
            &format!("{dir}/README.md"),
            &format!("# {name}\n\nInstallation and usage notes.\n"),
        );
        self.write_file(
            &format!("{dir}/CHANGELOG.md"),
            "# Changelog\n\n## 1.0.0\n\n- Initial release with codebase audit workflow\n",
        );
    }

    /// `claudex` command rooted at this repository
    pub fn cmd(&self) -> Command {
        let mut cmd = claudex_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// SKILL.md content scoring 100 in every category
#[allow(dead_code)]
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

/// marketplace.json with one plugin group per `(name, skills)` pair
#[allow(dead_code)]
pub fn marketplace_json(plugins: &[(&str, &[&str])]) -> Value {
    let plugins: Vec<Value> = plugins
        .iter()
        .map(|(name, skills)| {
            json!({
                "name": name,
                "description": format!("{name} skills"),
                "source": format!("./plugins/{name}"),
                "strict": false,
                "skills": skills,
            })
        })
        .collect();

    json!({
        "name": "claudex",
        "owner": {"name": "Claudex Maintainers", "email": "maintainers@example.com"},
        "metadata": {"description": "Skill marketplace", "version": "1.0.0"},
        "plugins": plugins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_creation() {
        let repo = TestRepo::new();
        assert!(repo.path.exists());
    }

    #[test]
    fn test_valid_repo_layout() {
        let repo = TestRepo::valid();
        assert!(repo.path.join(".claude-plugin/marketplace.json").is_file());
        assert!(
            repo.path
                .join("plugins/analysis/skills/codebase-auditor/SKILL.md")
                .is_file()
        );
    }
}
