use clap::Parser;

/// Arguments for the validate-marketplace command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the registry:\n    claudex validate-marketplace\n\n\
                  Apply the full upstream schema:\n    claudex validate-marketplace --strict\n\n\
                  Emit machine-readable results:\n    claudex --format json validate-marketplace")]
pub struct ValidateMarketplaceArgs {
    /// Require `source` and `strict` on every plugin and forbid root sources
    #[arg(long)]
    pub strict: bool,
}
