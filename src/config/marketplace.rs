//! Marketplace registry (.claude-plugin/marketplace.json)
//!
//! The validators inspect the raw JSON value so that type mismatches become
//! findings rather than parse failures. [`MarketplaceManifest`] is the
//! lenient, typed view used once the shape is known to be usable: entries of
//! the wrong type are skipped instead of rejected.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, fs, marketplace};

/// Typed view of marketplace.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarketplaceManifest {
    pub name: Option<String>,
    pub owner: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub plugins: Vec<MarketplacePlugin>,
}

/// A plugin group in marketplace.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarketplacePlugin {
    /// Position in the registry's `plugins` array
    pub index: usize,
    pub name: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub strict: Option<bool>,
    /// Skill directory paths, as written (usually `./`-prefixed)
    pub skills: Vec<String>,
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

impl MarketplacePlugin {
    fn from_value(index: usize, value: &Value) -> Self {
        let skills = value
            .get("skills")
            .and_then(Value::as_array)
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            index,
            name: str_field(value, "name"),
            description: str_field(value, "description"),
            source: str_field(value, "source"),
            strict: value.get("strict").and_then(Value::as_bool),
            skills,
        }
    }

    /// Display label: the plugin name, or its registry position when unnamed
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Plugin #{}", self.index))
    }
}

impl MarketplaceManifest {
    /// Build the typed view from a parsed marketplace.json value
    pub fn from_value(value: &Value) -> Self {
        let metadata = value.get("metadata");
        let plugins = value
            .get("plugins")
            .and_then(Value::as_array)
            .map(|plugins| {
                plugins
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.is_object())
                    .map(|(index, p)| MarketplacePlugin::from_value(index, p))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: str_field(value, "name"),
            owner: value.get("owner").and_then(|o| str_field(o, "name")),
            description: metadata.and_then(|m| str_field(m, "description")),
            version: metadata.and_then(|m| str_field(m, "version")),
            plugins,
        }
    }

    /// Total number of skill paths across all plugins
    pub fn total_skills(&self) -> usize {
        self.plugins.iter().map(|p| p.skills.len()).sum()
    }

    /// Iterate `(plugin, skill_path)` pairs in registry order
    pub fn skill_paths(&self) -> impl Iterator<Item = (&MarketplacePlugin, &str)> {
        self.plugins
            .iter()
            .flat_map(|p| p.skills.iter().map(move |s| (p, s.as_str())))
    }
}

/// Read and parse marketplace.json into a JSON object value
///
/// Fails when the file is missing, unreadable, not JSON, or not a JSON object.
pub fn load_value(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(marketplace::not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| marketplace::parse_failed(path.display().to_string(), e.to_string()))?;

    if !value.is_object() {
        return Err(marketplace::invalid("top-level value must be an object"));
    }

    Ok(value)
}

/// Resolve a registry skill path against the repository root
///
/// A leading `./` is stripped; everything else is joined as written.
pub fn resolve_skill_path(root: &Path, skill_path: &str) -> std::path::PathBuf {
    let relative = skill_path.strip_prefix("./").unwrap_or(skill_path);
    root.join(relative)
}

/// Last path component of a registry skill path
pub fn skill_dir_name(skill_path: &str) -> &str {
    skill_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(skill_path)
}
