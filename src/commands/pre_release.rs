//! pre-release command implementation

use crate::cli::PreReleaseArgs;
use crate::commands::Outcome;
use crate::commands::helpers::{Context, emit};
use crate::error::Result;
use crate::prerelease::PreReleaseSuite;
use crate::report::display::write_prerelease;

/// Run pre-release command
pub fn run(ctx: &Context, args: &PreReleaseArgs) -> Result<Outcome> {
    let result = PreReleaseSuite::new(&ctx.root, &ctx.config, args.quick, ctx.verbose)
        .strict(args.strict)
        .run()?;
    emit(ctx.format, &result, |out| write_prerelease(out, &result, ctx.verbose))?;
    Ok(Outcome::from_passed(result.all_passed()))
}
