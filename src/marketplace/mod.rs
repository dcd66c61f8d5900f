//! marketplace.json validation
//!
//! Checks the registry against the plugin marketplace schema and confirms
//! that every skill it references exists on disk. Problems are collected as
//! findings; only a registry that cannot be loaded at all is an `Err`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::marketplace::{load_value, resolve_skill_path};
use crate::config::{MARKETPLACE_JSON, MarketplaceManifest, ValidatorConfig};
use crate::error::Result;
use crate::report::Report;

/// Top-level fields every marketplace.json must declare
pub const REQUIRED_FIELDS: &[&str] = &["name", "owner", "metadata", "plugins"];

/// Plugin fields that are always required
const REQUIRED_PLUGIN_FIELDS: &[&str] = &["name", "description", "skills"];

/// Plugin fields required by the full upstream schema (strict mode)
const SCHEMA_PLUGIN_FIELDS: &[&str] = &["source", "strict"];

/// Sources that point at the repository root
pub const ROOT_SOURCES: &[&str] = &["./", ".", ""];

/// Result of validating marketplace.json
#[derive(Debug, Clone, Serialize)]
pub struct MarketplaceReport {
    pub path: PathBuf,
    pub report: Report,
    pub summary: MarketplaceSummary,
}

impl MarketplaceReport {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketplaceSummary {
    pub name: String,
    pub plugin_groups: usize,
    pub total_skills: usize,
}

/// Validates `.claude-plugin/marketplace.json` under a repository root
pub struct MarketplaceValidator<'a> {
    root: PathBuf,
    config: &'a ValidatorConfig,
    strict: bool,
}

/// JSON type name for messages
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether `version` is a semantic version (`X.Y.Z[-pre][+build]`)
pub fn is_valid_semver(version: &str) -> bool {
    semver::Version::parse(version).is_ok()
}

/// Display label for a plugin entry: its name, or its position when unnamed
fn plugin_label(plugin: &Value, idx: usize) -> String {
    plugin
        .get("name")
        .and_then(Value::as_str)
        .map_or_else(|| format!("Plugin #{idx}"), str::to_string)
}

impl<'a> MarketplaceValidator<'a> {
    pub fn new(root: impl Into<PathBuf>, config: &'a ValidatorConfig, strict: bool) -> Self {
        Self {
            root: root.into(),
            config,
            strict,
        }
    }

    pub fn marketplace_path(&self) -> PathBuf {
        self.root.join(MARKETPLACE_JSON)
    }

    /// Load marketplace.json and run every check
    pub fn validate(&self) -> Result<MarketplaceReport> {
        let path = self.marketplace_path();
        tracing::debug!(path = %path.display(), strict = self.strict, "validating marketplace");
        let value = load_value(&path)?;
        Ok(self.validate_value(&value, path))
    }

    /// Run every check against an already parsed document
    pub fn validate_value(&self, value: &Value, path: PathBuf) -> MarketplaceReport {
        let mut report = Report::new();
        let empty = Map::new();
        let doc = value.as_object().unwrap_or(&empty);

        self.check_structure(doc, &mut report);
        self.check_owner(doc, &mut report);
        self.check_metadata(doc, &mut report);
        self.check_plugins(doc, &mut report);
        self.check_source_isolation(doc, &mut report);
        self.check_skill_references(doc, &mut report);
        self.check_skill_files(doc, &mut report);

        let manifest = MarketplaceManifest::from_value(value);
        let summary = MarketplaceSummary {
            name: manifest.name.clone().unwrap_or_else(|| "unknown".to_string()),
            plugin_groups: manifest.plugins.len(),
            total_skills: manifest.total_skills(),
        };

        tracing::debug!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            "marketplace validation finished"
        );

        MarketplaceReport {
            path,
            report,
            summary,
        }
    }

    fn check_structure(&self, doc: &Map<String, Value>, report: &mut Report) {
        for field in REQUIRED_FIELDS {
            if !doc.contains_key(*field) {
                report.error(format!("Missing required field: '{field}'"));
            }
        }
    }

    fn check_owner(&self, doc: &Map<String, Value>, report: &mut Report) {
        let Some(owner) = doc.get("owner") else {
            return;
        };

        let Some(owner) = owner.as_object() else {
            report.error("'owner' must be an object");
            return;
        };

        if !owner.contains_key("name") {
            report.error("'owner.name' is required");
        }

        if !owner.contains_key("email") {
            report.warning("'owner.email' is recommended (required by the upstream schema)");
        }
    }

    fn check_metadata(&self, doc: &Map<String, Value>, report: &mut Report) {
        let Some(metadata) = doc.get("metadata") else {
            report.warning("'metadata' is recommended");
            return;
        };

        let Some(metadata) = metadata.as_object() else {
            report.error("'metadata' must be an object");
            return;
        };

        if !metadata.contains_key("description") {
            report.warning("'metadata.description' is recommended");
        }

        match metadata.get("version") {
            None => report.warning("'metadata.version' is recommended"),
            Some(Value::String(version)) if is_valid_semver(version) => {}
            Some(version) => {
                let shown = version.as_str().map_or_else(|| version.to_string(), str::to_string);
                report.warning(format!(
                    "Version '{shown}' doesn't follow semantic versioning (e.g., 1.0.0)"
                ));
            }
        }
    }

    fn check_plugins(&self, doc: &Map<String, Value>, report: &mut Report) {
        let Some(plugins) = doc.get("plugins") else {
            return;
        };

        let Some(plugins) = plugins.as_array() else {
            report.error("'plugins' must be an array");
            return;
        };

        if plugins.is_empty() {
            report.warning("No plugins defined in marketplace");
            return;
        }

        let mut plugin_names: HashSet<&str> = HashSet::new();
        for (idx, plugin) in plugins.iter().enumerate() {
            self.check_plugin_entry(plugin, idx, &mut plugin_names, report);
        }
    }

    fn check_plugin_entry<'v>(
        &self,
        plugin: &'v Value,
        idx: usize,
        plugin_names: &mut HashSet<&'v str>,
        report: &mut Report,
    ) {
        let label = plugin_label(plugin, idx);
        let Some(entry) = plugin.as_object() else {
            report.error(format!("{label}: entry must be an object"));
            return;
        };

        for field in REQUIRED_PLUGIN_FIELDS {
            if !entry.contains_key(*field) {
                report.error(format!("Plugin '{label}': Missing required field '{field}'"));
            }
        }
        for field in SCHEMA_PLUGIN_FIELDS {
            if !entry.contains_key(*field) {
                report.strict_error(
                    self.strict,
                    format!("Plugin '{label}': Missing required field '{field}'"),
                );
            }
        }

        match entry.get("name") {
            Some(Value::String(name)) => {
                if !plugin_names.insert(name.as_str()) {
                    report.error(format!("Plugin '{name}': Duplicate plugin name"));
                }
            }
            Some(other) => report.error(format!(
                "{label}: 'name' must be a string, got {}",
                json_type(other)
            )),
            None => {}
        }

        match entry.get("description") {
            Some(Value::String(_)) | None => {}
            Some(other) => report.error(format!(
                "Plugin '{label}': 'description' must be a string, got {}",
                json_type(other)
            )),
        }

        match entry.get("source") {
            Some(Value::String(source)) => {
                if !source.starts_with("./") {
                    report.warning(format!(
                        "Plugin '{label}': Source should start with './'"
                    ));
                }
            }
            Some(_) => report.error(format!("Plugin '{label}': 'source' must be a string")),
            None => {}
        }

        if let Some(strict) = entry.get("strict") {
            if !strict.is_boolean() {
                report.error(format!("Plugin '{label}': 'strict' must be a boolean"));
            }
        }

        match entry.get("skills") {
            Some(Value::Array(skills)) if skills.is_empty() => {
                report.warning(format!("Plugin '{label}': Empty skills array"));
            }
            Some(Value::Array(_)) | None => {}
            Some(_) => report.error(format!("Plugin '{label}': 'skills' must be an array")),
        }
    }

    /// Plugins that share the repository root as their source make the host
    /// cache the whole repository once per plugin.
    fn check_source_isolation(&self, doc: &Map<String, Value>, report: &mut Report) {
        let Some(plugins) = doc.get("plugins").and_then(Value::as_array) else {
            return;
        };

        let mut root_source_with_skills = Vec::new();
        let mut root_source_hooks_only = Vec::new();

        for plugin in plugins {
            let (Some(name), Some(source)) = (
                plugin.get("name").and_then(Value::as_str),
                plugin.get("source").and_then(Value::as_str),
            ) else {
                continue;
            };

            if !ROOT_SOURCES.contains(&source) {
                continue;
            }

            let has_skills = plugin
                .get("skills")
                .and_then(Value::as_array)
                .is_some_and(|s| !s.is_empty());

            if has_skills {
                root_source_with_skills.push(name);
            } else {
                root_source_hooks_only.push(name);
            }
        }

        if !root_source_with_skills.is_empty() {
            report.strict_error(
                self.strict,
                format!(
                    "Cache duplication risk: Plugin(s) [{}] use root source './' - the host caches \
                     the whole repository for each of them. Use isolated paths like \
                     './plugins/{{name}}' instead.",
                    root_source_with_skills.join(", ")
                ),
            );
        }

        if !root_source_hooks_only.is_empty() {
            report.warning(format!(
                "Plugin(s) [{}] use root source './'. Consider using isolated paths for consistency.",
                root_source_hooks_only.join(", ")
            ));
        }
    }

    fn check_skill_references(&self, doc: &Map<String, Value>, report: &mut Report) {
        let Some(plugins) = doc.get("plugins").and_then(Value::as_array) else {
            return;
        };

        let mut all_skill_paths: HashSet<&str> = HashSet::new();

        for (idx, plugin) in plugins.iter().enumerate() {
            let Some(skills) = plugin.get("skills").and_then(Value::as_array) else {
                continue;
            };
            let label = plugin_label(plugin, idx);

            for skill_path in skills {
                let Some(skill_path) = skill_path.as_str() else {
                    report.error(format!(
                        "Plugin '{label}': Skill path must be a string, got {}",
                        json_type(skill_path)
                    ));
                    continue;
                };

                if !skill_path.starts_with("./") {
                    report.warning(format!(
                        "Plugin '{label}': Skill path '{skill_path}' should start with './'"
                    ));
                }

                if !all_skill_paths.insert(skill_path) {
                    report.warning(format!(
                        "Skill '{skill_path}' is referenced in multiple plugins"
                    ));
                }
            }
        }
    }

    fn check_skill_files(&self, doc: &Map<String, Value>, report: &mut Report) {
        let Some(plugins) = doc.get("plugins").and_then(Value::as_array) else {
            return;
        };

        for (idx, plugin) in plugins.iter().enumerate() {
            let Some(skills) = plugin.get("skills").and_then(Value::as_array) else {
                continue;
            };
            let label = plugin_label(plugin, idx);

            for skill_path in skills.iter().filter_map(Value::as_str) {
                let skill_dir = resolve_skill_path(&self.root, skill_path);
                self.check_skill_dir(&label, skill_path, &skill_dir, report);
            }
        }
    }

    fn check_skill_dir(&self, label: &str, skill_path: &str, skill_dir: &Path, report: &mut Report) {
        tracing::trace!(plugin = label, path = skill_path, "checking skill directory");

        if !skill_dir.exists() {
            report.error(format!(
                "Plugin '{label}': Skill directory not found: {skill_path}"
            ));
            return;
        }

        if !skill_dir.is_dir() {
            report.error(format!(
                "Plugin '{label}': Skill path is not a directory: {skill_path}"
            ));
            return;
        }

        let skill_md = skill_dir.join("SKILL.md");
        if !skill_md.exists() {
            report.error(format!(
                "Plugin '{label}': Missing SKILL.md at {skill_path}/SKILL.md"
            ));
            return;
        }

        match std::fs::read_to_string(&skill_md) {
            Ok(content) => {
                let chars = content.chars().count();
                if content.trim().is_empty() {
                    report.error(format!("Plugin '{label}': SKILL.md is empty in {skill_path}"));
                } else if chars < self.config.limits.min_skill_md_chars {
                    report.warning(format!(
                        "Plugin '{label}': SKILL.md seems very short in {skill_path} ({chars} chars)"
                    ));
                }
            }
            Err(e) => report.error(format!(
                "Plugin '{label}': Could not read SKILL.md in {skill_path}: {e}"
            )),
        }

        if skill_dir.join("plugin.json").exists() {
            report.warning(format!(
                "Skill '{skill_path}': Contains plugin.json (marketplace.json is the single source of truth)"
            ));
        }
    }
}
