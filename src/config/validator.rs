//! Validator configuration (claudex.yaml)
//!
//! Every key is optional. A repository without `claudex.yaml` is validated
//! against the published skill limits.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CONFIG_FILE;
use crate::error::{Result, config};

/// Top-level `claudex.yaml` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub limits: Limits,

    /// Files every skill directory is expected to contain
    pub required_files: Vec<String>,
}

/// Numeric thresholds used by the skill and marketplace checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Hard limit on `name`
    pub max_name_length: usize,

    /// Hard limit on `description`
    pub max_description_length: usize,

    pub min_description_length: usize,
    pub recommended_description_words: usize,
    pub max_description_words: usize,

    /// Progressive disclosure target for SKILL.md
    pub max_skill_md_lines: usize,

    /// SKILL.md files shorter than this are flagged by the marketplace check
    pub min_skill_md_chars: usize,

    pub min_changelog_chars: usize,

    /// Minimum weighted score for a skill to pass in strict mode
    pub pass_score: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_length: 64,
            max_description_length: 1024,
            min_description_length: 50,
            recommended_description_words: 100,
            max_description_words: 150,
            max_skill_md_lines: 200,
            min_skill_md_chars: 100,
            min_changelog_chars: 50,
            pass_score: 70,
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            required_files: vec![
                "SKILL.md".to_string(),
                "README.md".to_string(),
                "CHANGELOG.md".to_string(),
            ],
        }
    }
}

impl ValidatorConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to null, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(CONFIG_FILE, e.to_string()))
    }

    /// Load `claudex.yaml` from the repository root, falling back to defaults
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no validator config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            crate::error::ClaudexError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;

        tracing::debug!(path = %path.display(), ?config, "loaded validator config");
        Ok(config)
    }
}
