//! Claudex - skill marketplace validator
//!
//! Validates a Claudex repository: the plugin registry in
//! `.claude-plugin/marketplace.json`, the `SKILL.md` manifests it points at,
//! and the release checks that tie them together.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod frontmatter;
mod logging;
mod marketplace;
mod prerelease;
mod report;
mod skills;
mod workspace;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::Outcome;
use commands::helpers::Context;
use error::Result;

fn run(cli: Cli) -> Result<Outcome> {
    let ctx = || Context::load(cli.root.clone(), cli.verbose, cli.format);

    match &cli.command {
        Commands::ValidateMarketplace(args) => commands::validate_marketplace::run(&ctx()?, args),
        Commands::ValidateSkills(args) => commands::validate_skills::run(&ctx()?, args),
        Commands::PreRelease(args) => commands::pre_release::run(&ctx()?, args),
        Commands::Version => commands::version::run().map(|()| Outcome::Passed),
        Commands::Completions(args) => commands::completions::run(args).map(|()| Outcome::Passed),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: {e}");
    }

    match run(cli) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
