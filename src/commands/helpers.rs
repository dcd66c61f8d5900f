//! Command helper utilities

use std::io::{self, StdoutLock};
use std::path::PathBuf;

use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::error::Result;
use crate::report::OutputFormat;
use crate::report::display::write_json;
use crate::workspace;

/// Settings shared by the validation commands
#[derive(Debug)]
pub struct Context {
    pub root: PathBuf,
    pub config: ValidatorConfig,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the repository root and load its `claudex.yaml`
    pub fn load(root: Option<PathBuf>, verbose: bool, format: OutputFormat) -> Result<Self> {
        let root = workspace::find_repo_root(root)?;
        let config = ValidatorConfig::load(&root)?;
        tracing::debug!(root = %root.display(), "loaded validator configuration");
        Ok(Self {
            root,
            config,
            verbose,
            format,
        })
    }
}

/// Print `value` as JSON, or render it as text with `text`
pub fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&mut StdoutLock<'static>) -> io::Result<()>,
{
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => write_json(&mut out, value)?,
        OutputFormat::Text => text(&mut out)?,
    }
    Ok(())
}
