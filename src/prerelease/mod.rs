//! Pre-release gate
//!
//! Runs a fixed list of named release checks against the registry and the
//! skills it references, then both validators in-process. The release is
//! ready when every check and both validators pass.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::config::marketplace::{load_value, resolve_skill_path, skill_dir_name};
use crate::config::{MARKETPLACE_JSON, MarketplaceManifest, ValidatorConfig};
use crate::error::{Result, fs};
use crate::frontmatter;
use crate::marketplace::{MarketplaceValidator, REQUIRED_FIELDS, ROOT_SOURCES, is_valid_semver};
use crate::skills::{self, SKILL_MD, content};

/// How many offending items a failed check lists
const SHOWN_ITEMS: usize = 3;

/// Release steps that cannot be automated
pub const MANUAL_CHECKLIST: &[(&str, &[&str])] = &[
    (
        "Fresh Installation Test",
        &[
            "Clear the cached copy of the marketplace plugins",
            "/plugin marketplace remove claudex",
            "/plugin marketplace add <owner>/claudex",
            "Verify: No 'plugin not found' errors",
        ],
    ),
    (
        "Plugin Menu Verification",
        &[
            "Run /plugin in the agent host",
            "Verify all plugin groups appear",
            "Verify skill counts match",
        ],
    ),
    (
        "Skill Triggering Test",
        &[
            "Test that skills trigger from their documented phrases:",
            "  - 'audit my codebase' → codebase-auditor",
            "  - 'check accessibility' → accessibility-audit",
        ],
    ),
    (
        "Schema Comparison",
        &[
            "Compare marketplace.json with the upstream plugin marketplace schema",
            "Verify each plugin group has its own source directory",
        ],
    ),
    (
        "Regression Check",
        &[
            "Test existing skills still work",
            "Verify no duplicate skill entries",
            "Check plugin descriptions render correctly",
        ],
    ),
];

/// Quick mode skips the checks that read every file of every skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Quick,
    Full,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Quick => write!(f, "Quick"),
            Mode::Full => write!(f, "Full"),
        }
    }
}

/// Outcome of one named check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
}

/// Outcome of running one of the validators in-process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorResult {
    pub name: String,
    pub passed: bool,
    /// Summary line on success, first error on failure
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    pub version: String,
    pub plugin_groups: usize,
    pub total_skills: usize,
    pub checks_passed: usize,
    pub checks_total: usize,
}

/// Everything a pre-release run produced
#[derive(Debug, Clone, Serialize)]
pub struct PreReleaseReport {
    pub mode: Mode,
    pub checks: Vec<CheckResult>,
    pub validators: Vec<ValidatorResult>,
    pub summary: ReleaseSummary,
}

impl PreReleaseReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed) && self.validators.iter().all(|v| v.passed)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

type CheckOutcome = Result<(bool, String)>;

/// Named release checks, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    MarketplaceSchema,
    SkillPaths,
    SkillFrontmatter,
    NameDirectoryMatch,
    NoDuplicateSkills,
    VersionConsistency,
    RequiredFiles,
    NoPluginJson,
    DescriptionQuality,
    SourceIsolation,
    InternalLinks,
    ScriptPermissions,
    ChangelogEntries,
}

impl Check {
    pub const QUICK: &'static [Check] = &[
        Check::MarketplaceSchema,
        Check::SkillPaths,
        Check::SkillFrontmatter,
        Check::NameDirectoryMatch,
        Check::NoDuplicateSkills,
        Check::VersionConsistency,
        Check::RequiredFiles,
        Check::NoPluginJson,
        Check::DescriptionQuality,
        Check::SourceIsolation,
    ];

    /// Checks that only run in full mode
    pub const SLOW: &'static [Check] = &[
        Check::InternalLinks,
        Check::ScriptPermissions,
        Check::ChangelogEntries,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Check::MarketplaceSchema => "1. Marketplace Schema",
            Check::SkillPaths => "2. Skill Paths Exist",
            Check::SkillFrontmatter => "3. SKILL.md Frontmatter",
            Check::NameDirectoryMatch => "4. Name-Directory Match",
            Check::NoDuplicateSkills => "5. No Duplicate Skills",
            Check::VersionConsistency => "6. Version Consistency",
            Check::RequiredFiles => "7. Required Files",
            Check::NoPluginJson => "8. No plugin.json Files",
            Check::DescriptionQuality => "9. Description Quality",
            Check::SourceIsolation => "10. Source Isolation",
            Check::InternalLinks => "11. Internal Link Validation",
            Check::ScriptPermissions => "12. Script Permissions",
            Check::ChangelogEntries => "13. Changelog Entries",
        }
    }
}

/// The loaded registry, raw and typed
struct Registry {
    value: Value,
    manifest: MarketplaceManifest,
}

/// A skill referenced by the registry that has a readable SKILL.md
struct ReferencedSkill {
    dir_name: String,
    content: String,
}

fn list_items(items: &[String]) -> String {
    let shown = items
        .iter()
        .take(SHOWN_ITEMS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > SHOWN_ITEMS {
        format!("{shown}...")
    } else {
        shown
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))
}

/// Runs the release checks for a marketplace repository
pub struct PreReleaseSuite<'a> {
    root: PathBuf,
    config: &'a ValidatorConfig,
    mode: Mode,
    verbose: bool,
    strict: bool,
}

impl<'a> PreReleaseSuite<'a> {
    pub fn new(root: impl Into<PathBuf>, config: &'a ValidatorConfig, quick: bool, verbose: bool) -> Self {
        Self {
            root: root.into(),
            config,
            mode: if quick { Mode::Quick } else { Mode::Full },
            verbose,
            strict: false,
        }
    }

    /// Run the in-process validators in strict mode
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load the registry and run every check for the configured mode
    ///
    /// Fails only when marketplace.json cannot be loaded.
    pub fn run(&self) -> Result<PreReleaseReport> {
        let value = load_value(&self.root.join(MARKETPLACE_JSON))?;
        let registry = Registry {
            manifest: MarketplaceManifest::from_value(&value),
            value,
        };

        let slow: &[Check] = match self.mode {
            Mode::Quick => &[],
            Mode::Full => Check::SLOW,
        };

        let checks: Vec<CheckResult> = Check::QUICK
            .iter()
            .chain(slow)
            .map(|&check| {
                let (passed, message) = self
                    .run_check(check, &registry)
                    .unwrap_or_else(|e| (false, e.to_string()));
                tracing::debug!(check = check.name(), passed, %message, "release check");
                CheckResult {
                    name: check.name().to_string(),
                    passed,
                    message,
                }
            })
            .collect();

        let validators = vec![self.run_marketplace_validator(), self.run_skills_validator()];

        let summary = ReleaseSummary {
            version: registry
                .manifest
                .version
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            plugin_groups: registry.manifest.plugins.len(),
            total_skills: registry.manifest.total_skills(),
            checks_passed: checks.iter().filter(|c| c.passed).count(),
            checks_total: checks.len(),
        };

        Ok(PreReleaseReport {
            mode: self.mode,
            checks,
            validators,
            summary,
        })
    }

    fn run_check(&self, check: Check, registry: &Registry) -> CheckOutcome {
        match check {
            Check::MarketplaceSchema => self.check_marketplace_schema(registry),
            Check::SkillPaths => self.check_skill_paths(registry),
            Check::SkillFrontmatter => self.check_skill_frontmatter(registry),
            Check::NameDirectoryMatch => self.check_name_directory_match(registry),
            Check::NoDuplicateSkills => self.check_no_duplicate_skills(registry),
            Check::VersionConsistency => self.check_version_consistency(registry),
            Check::RequiredFiles => self.check_required_files(registry),
            Check::NoPluginJson => self.check_no_plugin_json(registry),
            Check::DescriptionQuality => self.check_description_quality(registry),
            Check::SourceIsolation => self.check_source_isolation(registry),
            Check::InternalLinks => self.check_internal_links(registry),
            Check::ScriptPermissions => self.check_script_permissions(registry),
            Check::ChangelogEntries => self.check_changelog_entries(registry),
        }
    }

    fn run_marketplace_validator(&self) -> ValidatorResult {
        let name = "Marketplace validation".to_string();
        match MarketplaceValidator::new(&self.root, self.config, self.strict).validate() {
            Ok(result) if result.is_valid() => ValidatorResult {
                name,
                passed: true,
                detail: format!(
                    "Total skills: {}, warnings: {}",
                    result.summary.total_skills,
                    result.report.warning_count()
                ),
            },
            Ok(result) => ValidatorResult {
                name,
                passed: false,
                detail: result
                    .report
                    .errors()
                    .first()
                    .map_or_else(String::new, |e| (*e).to_string()),
            },
            Err(e) => ValidatorResult {
                name,
                passed: false,
                detail: e.to_string(),
            },
        }
    }

    fn run_skills_validator(&self) -> ValidatorResult {
        let name = "Skills validation".to_string();
        let dirs = match skills::discover(&self.root, None) {
            Ok(dirs) => dirs,
            Err(e) => {
                return ValidatorResult {
                    name,
                    passed: false,
                    detail: e.to_string(),
                };
            }
        };

        let results = skills::validate_all(&self.root, &dirs, self.config, self.verbose, self.strict);
        if results.all_passed() {
            return ValidatorResult {
                name,
                passed: true,
                detail: format!("Passed: {}/{}", results.passed, results.total()),
            };
        }

        let detail = results
            .skills
            .iter()
            .find(|s| !s.passed)
            .map(|s| {
                let reason = s
                    .report
                    .errors()
                    .first()
                    .map_or_else(|| format!("score {:.0}%", s.score), |e| (*e).to_string());
                format!("{}: {reason}", s.path)
            })
            .unwrap_or_default();
        ValidatorResult {
            name,
            passed: false,
            detail,
        }
    }

    /// Skills whose SKILL.md exists, with their contents
    fn referenced_skills(&self, registry: &Registry) -> Result<Vec<ReferencedSkill>> {
        let mut found = Vec::new();
        for (_, path) in registry.manifest.skill_paths() {
            let skill_md = resolve_skill_path(&self.root, path).join(SKILL_MD);
            if !skill_md.is_file() {
                continue;
            }
            found.push(ReferencedSkill {
                dir_name: skill_dir_name(path).to_string(),
                content: read_to_string(&skill_md)?,
            });
        }
        Ok(found)
    }

    fn check_marketplace_schema(&self, registry: &Registry) -> CheckOutcome {
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|f| registry.value.get(f).is_none())
            .collect();
        if !missing.is_empty() {
            return Ok((false, format!("Missing required fields: {}", missing.join(", "))));
        }

        let version = registry.manifest.version.as_deref().unwrap_or("unknown");
        Ok((true, format!("Version {version}")))
    }

    fn check_skill_paths(&self, registry: &Registry) -> CheckOutcome {
        let mut total = 0;
        let mut missing = Vec::new();
        for (_, path) in registry.manifest.skill_paths() {
            total += 1;
            if !resolve_skill_path(&self.root, path).exists() {
                missing.push(path.to_string());
            }
        }

        if missing.is_empty() {
            Ok((true, format!("All {total} skill paths exist")))
        } else {
            Ok((false, format!("Missing: {}", list_items(&missing))))
        }
    }

    fn check_skill_frontmatter(&self, registry: &Registry) -> CheckOutcome {
        let mut issues = Vec::new();
        for skill in self.referenced_skills(registry)? {
            match frontmatter::split(&skill.content) {
                Ok((fm, _)) => {
                    for field in ["name", "description"] {
                        if !fm.contains(field) {
                            issues.push(format!("{}: Missing {field} in frontmatter", skill.dir_name));
                        }
                    }
                }
                Err(e) => issues.push(format!("{}: {e}", skill.dir_name)),
            }
        }

        match issues.first() {
            Some(first) => Ok((false, format!("{} issues: {first}", issues.len()))),
            None => Ok((true, "All frontmatter valid".to_string())),
        }
    }

    fn check_name_directory_match(&self, registry: &Registry) -> CheckOutcome {
        let mut mismatches = Vec::new();
        for skill in self.referenced_skills(registry)? {
            let Ok((fm, _)) = frontmatter::split(&skill.content) else {
                continue;
            };
            match fm.get_str("name") {
                Some(name) if name != skill.dir_name => {
                    mismatches.push(format!("{} (frontmatter: {name})", skill.dir_name));
                }
                _ => {}
            }
        }

        if mismatches.is_empty() {
            Ok((true, "All names match directories".to_string()))
        } else {
            Ok((false, format!("Mismatches: {}", list_items(&mismatches))))
        }
    }

    fn check_no_duplicate_skills(&self, registry: &Registry) -> CheckOutcome {
        let mut seen: HashMap<&str, String> = HashMap::new();
        let mut duplicates = Vec::new();
        for plugin in &registry.manifest.plugins {
            let label = plugin.label();
            for path in &plugin.skills {
                if let Some(first) = seen.get(path.as_str()) {
                    duplicates.push(format!("{path} (in {first} and {label})"));
                } else {
                    seen.insert(path.as_str(), label.clone());
                }
            }
        }

        match duplicates.first() {
            Some(first) => Ok((false, format!("Duplicates: {first}"))),
            None => Ok((true, format!("{} unique skills", seen.len()))),
        }
    }

    fn check_version_consistency(&self, registry: &Registry) -> CheckOutcome {
        match registry.manifest.version.as_deref() {
            None | Some("") => Ok((false, "No version in metadata".to_string())),
            Some(version) if !is_valid_semver(version) => Ok((false, format!("Invalid semver: {version}"))),
            Some(version) => Ok((true, format!("Version {version} is valid semver"))),
        }
    }

    fn check_required_files(&self, registry: &Registry) -> CheckOutcome {
        let mut required = vec![SKILL_MD];
        for file in &self.config.required_files {
            if !required.contains(&file.as_str()) {
                required.push(file);
            }
        }

        let mut missing = Vec::new();
        for (_, path) in registry.manifest.skill_paths() {
            let dir = resolve_skill_path(&self.root, path);
            for file in &required {
                if !dir.join(file).exists() {
                    missing.push(format!("{}/{file}", skill_dir_name(path)));
                }
            }
        }

        match missing.as_slice() {
            [] => Ok((true, "All required files present".to_string())),
            [only] => Ok((false, format!("Missing: {only}"))),
            [first, rest @ ..] => Ok((false, format!("Missing: {first} (+{} more)", rest.len()))),
        }
    }

    fn check_no_plugin_json(&self, registry: &Registry) -> CheckOutcome {
        let found: Vec<String> = registry
            .manifest
            .skill_paths()
            .filter(|(_, path)| resolve_skill_path(&self.root, path).join("plugin.json").exists())
            .map(|(_, path)| skill_dir_name(path).to_string())
            .collect();

        if found.is_empty() {
            Ok((true, "No plugin.json files".to_string()))
        } else {
            Ok((false, format!("Found in: {}", list_items(&found))))
        }
    }

    fn check_description_quality(&self, registry: &Registry) -> CheckOutcome {
        let limits = &self.config.limits;
        for skill in self.referenced_skills(registry)? {
            let Ok((fm, _)) = frontmatter::split(&skill.content) else {
                continue;
            };
            let Some(description) = fm.get_str("description") else {
                continue;
            };

            let len = description.trim().chars().count();
            if len > limits.max_description_length {
                return Ok((
                    false,
                    format!("{}: Description > {} chars", skill.dir_name, limits.max_description_length),
                ));
            }
            if len < limits.min_description_length {
                return Ok((
                    false,
                    format!("{}: Description < {} chars", skill.dir_name, limits.min_description_length),
                ));
            }
        }

        Ok((true, "All descriptions within limits".to_string()))
    }

    fn check_source_isolation(&self, registry: &Registry) -> CheckOutcome {
        let offender = registry.manifest.plugins.iter().find(|plugin| {
            !plugin.skills.is_empty()
                && plugin
                    .source
                    .as_deref()
                    .is_some_and(|source| ROOT_SOURCES.contains(&source))
        });

        match offender {
            Some(plugin) => Ok((
                false,
                format!(
                    "Plugin {}: root source duplicates the repository in the plugin cache",
                    plugin.label()
                ),
            )),
            None => Ok((true, "Every plugin group has an isolated source".to_string())),
        }
    }

    fn check_internal_links(&self, registry: &Registry) -> CheckOutcome {
        let mut broken = Vec::new();
        for (_, path) in registry.manifest.skill_paths() {
            let dir = resolve_skill_path(&self.root, path);
            if !dir.is_dir() {
                continue;
            }
            for md_file in content::files_matching(&dir, "**/*.md") {
                let text = read_to_string(&md_file)?;
                let base = md_file.parent().unwrap_or(&dir);
                let file_name = md_file
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                broken.extend(
                    content::broken_links(base, &text)
                        .into_iter()
                        .map(|link| format!("{file_name}: {link}")),
                );
            }
        }

        match broken.first() {
            None => Ok((true, "All internal links valid".to_string())),
            Some(first) => Ok((false, format!("{} broken links (first: {first})", broken.len()))),
        }
    }

    fn check_script_permissions(&self, registry: &Registry) -> CheckOutcome {
        let issues: Vec<String> = registry
            .manifest
            .skill_paths()
            .flat_map(|(_, path)| content::non_executable_scripts(&resolve_skill_path(&self.root, path)))
            .filter_map(|script| script.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();

        if issues.is_empty() {
            Ok((true, "All scripts executable".to_string()))
        } else {
            Ok((false, format!("Missing +x: {}", list_items(&issues))))
        }
    }

    fn check_changelog_entries(&self, registry: &Registry) -> CheckOutcome {
        let mut empty = Vec::new();
        for (_, path) in registry.manifest.skill_paths() {
            let changelog = resolve_skill_path(&self.root, path).join("CHANGELOG.md");
            if !changelog.is_file() {
                continue;
            }
            let text = read_to_string(&changelog)?;
            if text.trim().chars().count() < self.config.limits.min_changelog_chars {
                empty.push(skill_dir_name(path).to_string());
            }
        }

        if empty.is_empty() {
            Ok((true, "All changelogs have content".to_string()))
        } else {
            Ok((false, format!("Empty changelogs: {}", list_items(&empty))))
        }
    }
}
