//! validate-marketplace command implementation

use crate::cli::ValidateMarketplaceArgs;
use crate::commands::Outcome;
use crate::commands::helpers::{Context, emit};
use crate::error::Result;
use crate::marketplace::MarketplaceValidator;
use crate::report::display::write_marketplace;

/// Run validate-marketplace command
pub fn run(ctx: &Context, args: &ValidateMarketplaceArgs) -> Result<Outcome> {
    let result = MarketplaceValidator::new(&ctx.root, &ctx.config, args.strict).validate()?;
    emit(ctx.format, &result, |out| write_marketplace(out, &result))?;
    Ok(Outcome::from_passed(result.is_valid()))
}
