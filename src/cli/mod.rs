//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - marketplace: validate-marketplace arguments
//! - skills: validate-skills arguments
//! - pre_release: pre-release arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::report::OutputFormat;

pub mod completions;
pub mod marketplace;
pub mod pre_release;
pub mod skills;

pub use completions::CompletionsArgs;
pub use marketplace::ValidateMarketplaceArgs;
pub use pre_release::PreReleaseArgs;
pub use skills::ValidateSkillsArgs;

/// Claudex - skill marketplace validator
///
/// Checks marketplace.json and every SKILL.md it references before release.
#[derive(Parser, Debug)]
#[command(
    name = "claudex",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Validator for Claudex skill marketplaces",
    long_about = "Claudex validates a skill marketplace repository: the plugin registry in \
                  .claude-plugin/marketplace.json, the SKILL.md manifests it references, and \
                  the release checklist that ties them together.",
    after_help = "Examples:\n   \
                  claudex validate-marketplace           # Check marketplace.json\n   \
                  claudex validate-skills                # Score every skill\n   \
                  claudex validate-skills skills/foo     # Score one skill\n   \
                  claudex pre-release --quick            # Fast release gate\n   \
                  claudex --format json validate-skills  # JSON results on stdout\n"
)]
pub struct Cli {
    /// Repository root (defaults to the nearest directory with a marketplace.json)
    #[arg(long, short = 'r', global = true, env = "CLAUDEX_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Output format for validation results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate .claude-plugin/marketplace.json
    ValidateMarketplace(ValidateMarketplaceArgs),

    /// Validate and score SKILL.md manifests
    ValidateSkills(ValidateSkillsArgs),

    /// Run the release checks and both validators
    PreRelease(PreReleaseArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
