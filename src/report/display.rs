//! Rendering of validation results
//!
//! Text output uses `console::Style`, which drops colours automatically when
//! stdout is not a terminal. JSON output serializes the result types as-is.

use std::io::{self, Write};

use console::Style;
use serde::Serialize;

use super::{Report, Severity};
use crate::marketplace::MarketplaceReport;
use crate::prerelease::{MANUAL_CHECKLIST, PreReleaseReport};
use crate::skills::SkillsReport;
use crate::skills::scoring::Grade;

/// Warnings shown per failing skill outside verbose mode
const WARNINGS_SHOWN: usize = 3;

const RULE_WIDTH: usize = 60;

fn bold() -> Style {
    Style::new().bold()
}

fn grade_style(grade: Grade) -> Style {
    match grade {
        Grade::A | Grade::B => Style::new().green(),
        Grade::C => Style::new().yellow(),
        Grade::D | Grade::F => Style::new().red(),
    }
}

fn pass_fail(passed: bool) -> console::StyledObject<&'static str> {
    if passed {
        Style::new().green().apply_to("✓ PASS")
    } else {
        Style::new().red().apply_to("✗ FAIL")
    }
}

/// Write `value` as pretty JSON followed by a newline
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_findings(out: &mut impl Write, report: &Report, severity: Severity) -> io::Result<()> {
    let (title, style) = match severity {
        Severity::Error => ("❌ Errors", Style::new().red()),
        Severity::Warning => ("⚠️  Warnings", Style::new().yellow()),
        Severity::Info => ("ℹ️  Info", Style::new().blue()),
    };

    let messages: Vec<&str> = report
        .findings()
        .iter()
        .filter(|f| f.severity == severity)
        .map(|f| f.message.as_str())
        .collect();
    if messages.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        style.clone().bold().apply_to(format!("{title} ({}):", messages.len()))
    )?;
    for message in messages {
        writeln!(out, "  {}", style.apply_to(format!("• {message}")))?;
    }
    writeln!(out)
}

/// Render the marketplace validation result
pub fn write_marketplace(out: &mut impl Write, result: &MarketplaceReport) -> io::Result<()> {
    writeln!(out, "{}", bold().apply_to("🔍 Validating marketplace.json..."))?;
    writeln!(out)?;

    write_findings(out, &result.report, Severity::Error)?;
    write_findings(out, &result.report, Severity::Warning)?;
    write_findings(out, &result.report, Severity::Info)?;

    if result.is_valid() {
        writeln!(out, "{}", Style::new().green().bold().apply_to("✅ Validation passed!"))?;
        writeln!(out, "   Marketplace: {}", result.summary.name)?;
        writeln!(out, "   Plugin groups: {}", result.summary.plugin_groups)?;
        writeln!(out, "   Total skills: {}", result.summary.total_skills)?;
        writeln!(out, "   Warnings: {}", result.report.warning_count())?;
    } else {
        writeln!(
            out,
            "{}",
            Style::new().red().bold().apply_to(format!(
                "❌ Validation failed with {} error(s)",
                result.report.error_count()
            ))
        )?;
    }
    writeln!(out)
}

fn write_rule_heading(out: &mut impl Write, heading: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{}", bold().apply_to(&rule))?;
    writeln!(out, "{}", bold().apply_to(heading))?;
    writeln!(out, "{}", bold().apply_to(&rule))
}

/// Render per-skill results and the aggregate summary
pub fn write_skills(out: &mut impl Write, results: &SkillsReport, verbose: bool) -> io::Result<()> {
    if results.skills.is_empty() {
        writeln!(out, "{}", Style::new().yellow().apply_to("No skills found to validate"))?;
        return Ok(());
    }

    write_rule_heading(out, "Skills Validation Results")?;
    writeln!(out)?;

    for skill in &results.skills {
        let status = if skill.passed {
            Style::new().green().apply_to("PASS")
        } else {
            Style::new().red().apply_to("FAIL")
        };
        writeln!(
            out,
            "{status} {} ({:.0}%) {}",
            grade_style(skill.grade).apply_to(skill.grade),
            skill.score,
            Style::new().cyan().apply_to(&skill.path)
        )?;

        for error in skill.report.errors() {
            writeln!(out, "     {}", Style::new().red().apply_to(format!("✗ {error}")))?;
        }

        let warnings = skill.report.warnings();
        if verbose || !skill.passed {
            let shown = if verbose { warnings.len() } else { WARNINGS_SHOWN };
            for warning in warnings.iter().take(shown) {
                writeln!(out, "     {}", Style::new().yellow().apply_to(format!("⚠ {warning}")))?;
            }
            if warnings.len() > shown {
                writeln!(
                    out,
                    "     {}",
                    Style::new()
                        .yellow()
                        .apply_to(format!("... and {} more warnings", warnings.len() - shown))
                )?;
            }
        }

        if verbose {
            for info in skill.report.infos() {
                writeln!(out, "     {}", Style::new().blue().apply_to(format!("ℹ {info}")))?;
            }
        }
    }

    writeln!(out)?;
    write_rule_heading(out, "Summary")?;
    writeln!(out, "Total skills:  {}", results.total())?;
    writeln!(out, "Passed:        {}/{}", results.passed, results.total())?;
    writeln!(
        out,
        "Average score: {:.0}% (Grade {})",
        results.average_score, results.average_grade
    )?;
    writeln!(out)?;

    if results.all_passed() {
        writeln!(
            out,
            "{}",
            Style::new().green().bold().apply_to("✅ All skills passed validation!")
        )?;
    } else {
        writeln!(
            out,
            "{}",
            Style::new()
                .red()
                .bold()
                .apply_to(format!("❌ {} skill(s) failed validation", results.failed()))
        )?;
    }
    writeln!(out)
}

fn write_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", bold().apply_to(format!("═══ {title} ═══")))?;
    writeln!(out)
}

/// Render the release gate: checks, validators, summary and manual checklist
pub fn write_prerelease(out: &mut impl Write, result: &PreReleaseReport, verbose: bool) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        Style::new().magenta().bold().apply_to("CLAUDEX PRE-RELEASE VALIDATION SUITE")
    )?;
    writeln!(out, "{}", Style::new().dim().apply_to(format!("Mode: {}", result.mode)))?;

    write_section(out, "AUTOMATED CHECKS")?;
    for check in &result.checks {
        writeln!(out, "  {}  {}", pass_fail(check.passed), check.name)?;
        if !check.passed {
            writeln!(out, "         {}", Style::new().red().apply_to(&check.message))?;
        } else if verbose && !check.message.is_empty() {
            writeln!(out, "         {}", Style::new().dim().apply_to(&check.message))?;
        }
    }

    write_section(out, "VALIDATORS")?;
    for validator in &result.validators {
        writeln!(out, "  {}  {}", pass_fail(validator.passed), validator.name)?;
        if !validator.detail.is_empty() {
            let style = if validator.passed {
                Style::new().dim()
            } else {
                Style::new().red()
            };
            writeln!(out, "         {}", style.apply_to(&validator.detail))?;
        }
    }

    write_section(out, "SUMMARY")?;
    let summary = &result.summary;
    writeln!(
        out,
        "  Marketplace Version: {}",
        Style::new().cyan().apply_to(&summary.version)
    )?;
    writeln!(out, "  Plugin Groups:       {}", summary.plugin_groups)?;
    writeln!(out, "  Total Skills:        {}", summary.total_skills)?;
    writeln!(
        out,
        "  Checks Passed:       {}/{}",
        summary.checks_passed, summary.checks_total
    )?;
    writeln!(out)?;
    if result.all_passed() {
        writeln!(
            out,
            "  {}",
            Style::new().green().bold().apply_to("✅ ALL AUTOMATED CHECKS PASSED")
        )?;
    } else {
        writeln!(
            out,
            "  {}",
            Style::new().red().bold().apply_to("❌ SOME CHECKS FAILED - Review above")
        )?;
        let failed: Vec<&str> = result.failed_checks().map(|c| c.name.as_str()).collect();
        if !failed.is_empty() {
            writeln!(out, "  Failed checks: {}", failed.join(", "))?;
        }
    }

    write_section(out, "MANUAL VALIDATION CHECKLIST")?;
    for (section, items) in MANUAL_CHECKLIST {
        writeln!(out, "  {}", bold().apply_to(format!("[ ] {section}")))?;
        for item in *items {
            writeln!(out, "      {}", Style::new().dim().apply_to(item))?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "{}",
        Style::new().yellow().apply_to("Complete manual checks before publishing a release!")
    )
}
