use clap::Parser;

/// Arguments for the pre-release command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run every release check:\n    claudex pre-release\n\n\
                  Skip link, script and changelog checks:\n    claudex pre-release --quick\n\n\
                  Run the validators with the full upstream gate:\n    claudex pre-release --strict")]
pub struct PreReleaseArgs {
    /// Skip the checks that read every file of every skill
    #[arg(long)]
    pub quick: bool,

    /// Run both validators in strict mode
    #[arg(long)]
    pub strict: bool,
}
