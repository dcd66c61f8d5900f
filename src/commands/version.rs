//! Version command implementation

use std::io::{self, Write};

use crate::config::validator::Limits;
use crate::config::{CONFIG_FILE, MARKETPLACE_JSON};
use crate::error::Result;
use crate::skills::scoring::Category;

/// Run version command
pub fn run() -> Result<()> {
    write_version(&mut io::stdout().lock())?;
    Ok(())
}

fn write_version(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "claudex {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Validator for Claudex skill marketplaces")?;
    writeln!(out)?;
    writeln!(out, "Validates:")?;
    writeln!(out, "  Registry: {MARKETPLACE_JSON}")?;
    writeln!(out, "  Skills: SKILL.md manifests")?;
    writeln!(out, "  Config: {CONFIG_FILE} (optional)")?;
    writeln!(
        out,
        "  Scoring: {} categories, default pass score {}",
        Category::ALL.len(),
        Limits::default().pass_score
    )?;
    writeln!(out)?;
    writeln!(out, "Build info:")?;
    writeln!(out, "  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"))?;
    writeln!(out, "  Profile: {}", build_profile())?;

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
