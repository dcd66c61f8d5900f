use clap::Parser;
use std::path::PathBuf;

/// Arguments for the validate-skills command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate every skill in the repository:\n    claudex validate-skills\n\n\
                  Validate one plugin's skills:\n    claudex validate-skills plugins/analysis/skills\n\n\
                  Validate a single skill with all findings:\n    claudex -v validate-skills skills/codebase-auditor\n\n\
                  Enforce the score threshold and companion files:\n    claudex validate-skills --strict")]
pub struct ValidateSkillsArgs {
    /// Skill directory, or a directory to search for skills (relative to the root)
    pub path: Option<PathBuf>,

    /// Fail skills below the pass score and treat missing companion files as errors
    #[arg(long)]
    pub strict: bool,
}
