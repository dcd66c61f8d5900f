//! validate-skills command implementation

use std::path::{Path, PathBuf};

use crate::cli::ValidateSkillsArgs;
use crate::commands::Outcome;
use crate::commands::helpers::{Context, emit};
use crate::error::Result;
use crate::report::display::write_skills;
use crate::skills;

/// Run validate-skills command
pub fn run(ctx: &Context, args: &ValidateSkillsArgs) -> Result<Outcome> {
    let target = args.path.as_ref().map(|path| resolve_target(ctx, path));
    let dirs = skills::discover(&ctx.root, target.as_deref())?;

    let results = skills::validate_all(&ctx.root, &dirs, &ctx.config, ctx.verbose, args.strict);
    emit(ctx.format, &results, |out| write_skills(out, &results, ctx.verbose))?;
    Ok(Outcome::from_passed(results.all_passed()))
}

/// Relative targets are taken from the repository root
fn resolve_target(ctx: &Context, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        ctx.root.join(path)
    }
}
