//! Repository root discovery
//!
//! The validators resolve every registry path against the repository root,
//! so finding the right root matters more than anything else on startup.
//! Resolution order:
//!
//! 1. an explicit `--root` (or `CLAUDEX_ROOT`)
//! 2. the nearest ancestor holding `.claude-plugin/marketplace.json`
//! 3. the git work tree containing the start directory
//! 4. the start directory itself

use std::path::{Path, PathBuf};

use crate::config::MARKETPLACE_JSON;
use crate::error::{Result, fs, workspace};

/// Find the repository root starting from the current directory
pub fn find_repo_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}")))?;
    find_repo_root_from(&cwd, explicit)
}

/// Find the repository root starting from `start`
pub fn find_repo_root_from(start: &Path, explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        let root = if root.is_absolute() {
            root
        } else {
            start.join(root)
        };
        if !root.is_dir() {
            return Err(workspace::root_not_found(root.display().to_string()));
        }
        tracing::debug!(root = %root.display(), "using explicit repository root");
        return Ok(normalize(&root));
    }

    if let Some(root) = find_marketplace_ancestor(start) {
        tracing::debug!(root = %root.display(), "found marketplace.json ancestor");
        return Ok(normalize(&root));
    }

    if let Some(root) = find_git_repository_root(start) {
        tracing::debug!(root = %root.display(), "using git work tree as repository root");
        return Ok(normalize(&root));
    }

    tracing::debug!(root = %start.display(), "falling back to start directory");
    Ok(normalize(start))
}

/// Nearest ancestor (including `start`) that holds the marketplace registry
pub fn find_marketplace_ancestor(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(MARKETPLACE_JSON).is_file())
        .map(Path::to_path_buf)
}

/// Find git repository work tree from a starting path
pub fn find_git_repository_root(start: &Path) -> Option<PathBuf> {
    let repo = git2::Repository::discover(start).ok()?;
    repo.workdir().map(Path::to_path_buf)
}

/// Canonicalize for display (macOS /var -> /private/var, no `\\?\` on Windows).
/// Falls back to the path as given when canonicalization fails.
fn normalize(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Path of `path` relative to `root` for display, or `path` itself
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
