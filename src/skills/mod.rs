//! SKILL.md validation and quality scoring
//!
//! Each skill is checked for hard frontmatter requirements (errors) and
//! scored on seven weighted quality categories (warnings and info). A skill
//! passes when it has no errors; in strict mode it must also reach the
//! configured pass score.

pub mod content;
pub mod discovery;
pub mod scoring;

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::frontmatter::{self, Frontmatter};
use crate::report::Report;
use crate::workspace::display_relative;

pub use discovery::{SKILL_MD, discover};
use scoring::{Category, CategoryScore, Grade, Score, weighted_total};

/// Directories that hold progressively disclosed material
const SUPPORTING_DIRS: &[&str] = &["workflow", "reference", "examples", "templates", "data", "modes"];

const OPTIONAL_FIELDS: &[&str] = &["version", "author", "category", "tags", "license", "allowed-tools"];

const ACTION_VERBS: &[&str] = &[
    "validates",
    "generates",
    "creates",
    "audits",
    "analyzes",
    "automates",
    "detects",
    "provides",
    "extracts",
    "configures",
    "transforms",
    "builds",
    "processes",
    "enables",
    "supports",
];

const BOUNDARY_PHRASES: &[&str] = &["not for", "not suitable", "cannot", "doesn't", "limitations"];

const USE_CASE_PHRASES: &[&str] = &["when", "for", "use case", "use for"];

/// SKILL.md longer than this without pointers to supporting files is flagged
const UNSPLIT_SKILL_MD_LINES: usize = 150;

#[allow(clippy::expect_used)]
static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("kebab-case pattern is a valid literal"));

#[allow(clippy::expect_used)]
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,3} ").expect("header pattern is a valid literal"));

#[allow(clippy::expect_used)]
static BULLET_OR_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^\s*[-*] |\|.*\|)").expect("list/table pattern is a valid literal")
});

/// Result of validating one skill
#[derive(Debug, Clone, Serialize)]
pub struct SkillReport {
    /// Skill directory relative to the repository root
    pub path: String,
    pub passed: bool,
    pub score: f64,
    pub grade: Grade,
    pub categories: Vec<CategoryScore>,
    pub report: Report,
}

/// Validates a single skill directory
pub struct SkillValidator<'a> {
    skill_path: PathBuf,
    config: &'a ValidatorConfig,
    verbose: bool,
    strict: bool,
}

/// Everything the category checks read
struct SkillSource {
    content: String,
    frontmatter: Frontmatter,
}

impl SkillSource {
    fn lower(&self) -> String {
        self.content.to_lowercase()
    }
}

impl<'a> SkillValidator<'a> {
    pub fn new(skill_path: impl Into<PathBuf>, config: &'a ValidatorConfig) -> Self {
        Self {
            skill_path: skill_path.into(),
            config,
            verbose: false,
            strict: false,
        }
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn dir_name(&self) -> String {
        self.skill_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Run every check. `root` is only used to display the skill path.
    pub fn validate(&self, root: &Path) -> SkillReport {
        let path = display_relative(root, &self.skill_path);
        let _span = tracing::debug_span!("skill", path = %path).entered();
        let mut report = Report::new();

        let Some(source) = self.load(&mut report) else {
            return SkillReport {
                path,
                passed: false,
                score: 0.0,
                grade: Grade::F,
                categories: Vec::new(),
                report,
            };
        };

        let categories: Vec<CategoryScore> = Category::ALL
            .iter()
            .map(|&category| CategoryScore {
                category,
                score: self.score_category(category, &source, &mut report).value(),
            })
            .collect();

        let score = weighted_total(&categories);
        let meets_threshold = !self.strict || score >= f64::from(self.config.limits.pass_score);
        let passed = report.is_valid() && meets_threshold;

        tracing::debug!(score, passed, "skill validated");

        SkillReport {
            path,
            passed,
            score,
            grade: Grade::from_score(score),
            categories,
            report,
        }
    }

    fn load(&self, report: &mut Report) -> Option<SkillSource> {
        let skill_md = self.skill_path.join(SKILL_MD);
        if !skill_md.exists() {
            report.error("Missing SKILL.md file");
            return None;
        }

        let content = match std::fs::read_to_string(&skill_md) {
            Ok(content) => content,
            Err(e) => {
                report.error(format!("Could not read SKILL.md: {e}"));
                return None;
            }
        };

        let frontmatter = match frontmatter::split(&content) {
            Ok((frontmatter, _body)) => frontmatter,
            Err(e) => {
                report.error(e.to_string());
                Frontmatter::default()
            }
        };

        Some(SkillSource {
            content,
            frontmatter,
        })
    }

    fn score_category(&self, category: Category, source: &SkillSource, report: &mut Report) -> Score {
        match category {
            Category::FileStructure => self.check_file_structure(report),
            Category::Frontmatter => self.check_frontmatter(source, report),
            Category::SpecCompliance => self.check_spec_compliance(source, report),
            Category::DescriptionQuality => self.check_description_quality(source, report),
            Category::ProgressiveDisclosure => self.check_progressive_disclosure(source, report),
            Category::MainInstructions => self.check_main_instructions(source, report),
            Category::TestingInvocation => self.check_testing_invocation(source, report),
        }
    }

    fn info_verbose(&self, report: &mut Report, message: impl Into<String>) {
        if self.verbose {
            report.info(message);
        }
    }

    fn check_file_structure(&self, report: &mut Report) -> Score {
        let mut score = Score::full();

        for filename in &self.config.required_files {
            if !self.skill_path.join(filename).exists() {
                report.strict_error(self.strict, format!("Missing required file: {filename}"));
                score.deduct(20);
            }
        }

        let dirs_present = SUPPORTING_DIRS
            .iter()
            .filter(|d| self.skill_path.join(d).is_dir())
            .count();

        if dirs_present == 0 {
            report.info("No progressive disclosure directories found (workflow/, reference/, examples/)");
        } else if dirs_present >= 2 {
            report.info(format!(
                "Good progressive disclosure: {dirs_present} supporting directories"
            ));
        }

        if self.skill_path.join("plugin.json").exists() {
            report.warning("Contains plugin.json (not part of the skill format)");
            score.deduct(5);
        }

        score
    }

    fn check_frontmatter(&self, source: &SkillSource, report: &mut Report) -> Score {
        let mut score = Score::full();
        let fm = &source.frontmatter;

        match fm.get_str("name") {
            Some(name) => {
                if !KEBAB_CASE.is_match(&name) {
                    report.warning(format!(
                        "Name '{name}' should be lowercase with hyphens (kebab-case)"
                    ));
                    score.deduct(10);
                }
            }
            None if fm.contains("name") => {
                report.error("Frontmatter field 'name' must be a string");
                score.deduct(30);
            }
            None => {
                report.error("Frontmatter missing required field: name");
                score.deduct(30);
            }
        }

        match fm.get_str("description") {
            Some(description) if description.trim().is_empty() => {
                report.error("Frontmatter field 'description' is empty");
                score.deduct(30);
            }
            Some(_) => {}
            None if fm.contains("description") => {
                report.error("Frontmatter field 'description' must be a string");
                score.deduct(30);
            }
            None => {
                report.error("Frontmatter missing required field: description");
                score.deduct(30);
            }
        }

        let present_optional: Vec<&str> = OPTIONAL_FIELDS
            .iter()
            .copied()
            .filter(|f| fm.contains(f))
            .collect();
        if !present_optional.is_empty() {
            self.info_verbose(
                report,
                format!("Optional frontmatter fields: {}", present_optional.join(", ")),
            );
        }

        score
    }

    fn check_spec_compliance(&self, source: &SkillSource, report: &mut Report) -> Score {
        let mut score = Score::full();
        let limits = &self.config.limits;
        let fm = &source.frontmatter;

        if let Some(name) = fm.get_str("name") {
            let len = name.chars().count();
            if len > limits.max_name_length {
                report.error(format!(
                    "Name exceeds length limit: {len}/{} chars",
                    limits.max_name_length
                ));
                score.deduct(30);
            }

            let dir_name = self.dir_name();
            if name != dir_name {
                report.error(format!(
                    "Name '{name}' does not match directory '{dir_name}'"
                ));
                score.deduct(25);
            }
        }

        if let Some(description) = fm.get_str("description") {
            let len = description.chars().count();
            if len > limits.max_description_length {
                report.error(format!(
                    "Description exceeds length limit: {len}/{} chars",
                    limits.max_description_length
                ));
                score.deduct(20);
            }

            let word_count = description.split_whitespace().count();
            if word_count > limits.max_description_words {
                report.warning(format!(
                    "Description has {word_count} words (recommended: ~{})",
                    limits.recommended_description_words
                ));
                score.deduct(5);
            }
        }

        if !fm.contains("version") {
            report.warning("Missing 'version' field in frontmatter (recommended for marketplace)");
            score.deduct(10);
        }

        for link in content::broken_links(&self.skill_path, &source.content) {
            report.warning(format!("Referenced file not found: {link}"));
        }

        for script in content::non_executable_scripts(&self.skill_path) {
            let name = script
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            report.warning(format!("Script missing execute permission: {name}"));
        }

        score
    }

    fn check_description_quality(&self, source: &SkillSource, report: &mut Report) -> Score {
        let Some(description) = source.frontmatter.get_str("description") else {
            return Score::zero();
        };

        let mut score = Score::full();
        let limits = &self.config.limits;
        let len = description.chars().count();
        let lower = description.to_lowercase();

        if len < limits.min_description_length {
            report.warning(format!(
                "Description too short ({len} chars, min {})",
                limits.min_description_length
            ));
            score.deduct(15);
        } else if len > limits.max_description_length {
            report.warning(format!(
                "Description too long ({len} chars, max {})",
                limits.max_description_length
            ));
            score.deduct(10);
        }

        if lower.starts_with("use proactively") {
            self.info_verbose(report, "Uses the proactive trigger convention");
        } else if lower.contains("when") || lower.contains("for") {
            self.info_verbose(report, "Uses standard trigger context pattern");
        } else {
            report.warning("Consider adding trigger context ('When...' or 'Use when...')");
            score.deduct(10);
        }

        let verbs_found: Vec<&str> = ACTION_VERBS
            .iter()
            .copied()
            .filter(|v| lower.contains(v))
            .collect();
        if verbs_found.is_empty() {
            report.warning("Description lacks specific action verbs (validates, generates, creates, etc.)");
            score.deduct(15);
        } else if verbs_found.len() >= 2 {
            let shown: Vec<&str> = verbs_found.iter().take(3).copied().collect();
            self.info_verbose(report, format!("Good action verbs: {}", shown.join(", ")));
        }

        if !BOUNDARY_PHRASES.iter().any(|p| lower.contains(p)) {
            report.warning("Description should state what the skill is NOT for (boundaries)");
            score.deduct(10);
        }

        if !USE_CASE_PHRASES.iter().any(|p| lower.contains(p)) {
            report.warning("Description should include specific use cases");
            score.deduct(10);
        }

        score
    }

    fn check_progressive_disclosure(&self, source: &SkillSource, report: &mut Report) -> Score {
        let mut score = Score::full();
        let max_lines = self.config.limits.max_skill_md_lines;
        let line_count = source.content.split('\n').count();

        if line_count > max_lines {
            let over_by = line_count - max_lines;
            report.warning(format!(
                "SKILL.md has {line_count} lines (target <= {max_lines}, over by {over_by})"
            ));
            let penalty = (over_by / 10 * 5).min(30);
            score.deduct(i32::try_from(penalty).unwrap_or(30));
        } else {
            self.info_verbose(report, format!("Good SKILL.md size: {line_count} lines"));
        }

        let content = &source.content;
        let refs_count = [
            content.contains("workflow/") || content.contains("modes/"),
            content.contains("reference/"),
            content.contains("examples/"),
        ]
        .iter()
        .filter(|&&present| present)
        .count();

        if refs_count == 0 && line_count > UNSPLIT_SKILL_MD_LINES {
            report.warning("Large SKILL.md without references to workflow/, reference/, or examples/");
            score.deduct(20);
        } else if refs_count >= 2 {
            self.info_verbose(report, "Good progressive disclosure with file references");
        }

        score
    }

    fn check_testing_invocation(&self, source: &SkillSource, report: &mut Report) -> Score {
        let mut score = Score::full();
        let lower = source.lower();

        if !lower.contains("trigger") {
            report.warning("Missing trigger phrases documentation");
            score.deduct(30);
        }

        if !lower.contains("example") && !source.content.contains("```") {
            report.warning("No usage examples found");
            score.deduct(20);
        }

        if lower.contains("success criteria") || source.content.contains("- [ ]") {
            self.info_verbose(report, "Has success criteria checklist");
        }

        score
    }

    fn check_main_instructions(&self, source: &SkillSource, report: &mut Report) -> Score {
        let mut score = Score::full();
        let lower = source.lower();

        let sections: [(&str, &[&str]); 2] = [
            ("overview", &["## overview", "# overview"]),
            ("when to use", &["## when to use", "trigger phrase", "use case"]),
        ];
        for (section, patterns) in sections {
            if !patterns.iter().any(|p| lower.contains(p)) {
                report.warning(format!("Missing recommended section: {section}"));
                score.deduct(15);
            }
        }

        if !HEADER.is_match(&source.content) {
            report.warning("SKILL.md lacks markdown headers for structure");
            score.deduct(10);
        }

        if BULLET_OR_TABLE.is_match(&source.content) {
            self.info_verbose(report, "Good use of markdown formatting (tables/bullets)");
        }

        if !lower.contains("limitation") && !lower.contains("not for") {
            report.warning("Missing limitations or 'NOT for' section");
            score.deduct(10);
        }

        score
    }
}

/// Aggregate result of validating many skills
#[derive(Debug, Clone, Serialize)]
pub struct SkillsReport {
    pub skills: Vec<SkillReport>,
    pub passed: usize,
    pub average_score: f64,
    pub average_grade: Grade,
}

impl SkillsReport {
    pub fn from_results(skills: Vec<SkillReport>) -> Self {
        let passed = skills.iter().filter(|s| s.passed).count();
        let average_score = if skills.is_empty() {
            0.0
        } else {
            skills.iter().map(|s| s.score).sum::<f64>() / skills.len() as f64
        };
        Self {
            passed,
            average_score,
            average_grade: Grade::from_score(average_score),
            skills,
        }
    }

    pub fn total(&self) -> usize {
        self.skills.len()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed
    }

    /// True when every skill passed (vacuously true with no skills)
    pub fn all_passed(&self) -> bool {
        self.passed == self.skills.len()
    }
}

/// Validate each skill directory and aggregate the results
pub fn validate_all(
    root: &Path,
    dirs: &[PathBuf],
    config: &ValidatorConfig,
    verbose: bool,
    strict: bool,
) -> SkillsReport {
    let results = dirs
        .iter()
        .map(|dir| {
            SkillValidator::new(dir, config)
                .verbose(verbose)
                .strict(strict)
                .validate(root)
        })
        .collect();
    SkillsReport::from_results(results)
}
