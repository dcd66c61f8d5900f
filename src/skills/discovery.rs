//! Skill directory discovery
//!
//! Two repository layouts are supported:
//! - `plugins/<plugin>/skills/**/<skill>/SKILL.md`
//! - `skills/**/<skill>/SKILL.md`
//!
//! A directory holding `SKILL.md` is a skill; its subdirectories are not
//! searched further.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, skills};

pub const SKILL_MD: &str = "SKILL.md";

/// Recursively find skill directories below `base` (not `base` itself)
pub fn find_skills_recursive(base: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut it = WalkDir::new(base)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = it.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.path().join(SKILL_MD).is_file() {
            tracing::trace!(path = %entry.path().display(), "found skill");
            found.push(entry.into_path());
            it.skip_current_dir();
        }
    }

    found
}

/// Skill directories to validate, sorted by path.
///
/// With a `target`, the target itself when it is a skill, otherwise every
/// skill below it. Without one, every skill in the repository layout found
/// under `root`.
pub fn discover(root: &Path, target: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut dirs = match target {
        Some(target) => discover_target(target)?,
        None => discover_repository(root)?,
    };
    dirs.sort();
    tracing::debug!(count = dirs.len(), "discovered skills");
    Ok(dirs)
}

fn discover_target(target: &Path) -> Result<Vec<PathBuf>> {
    if !target.is_dir() {
        return Err(skills::target_not_directory(target.display().to_string()));
    }

    if target.join(SKILL_MD).is_file() {
        return Ok(vec![target.to_path_buf()]);
    }

    Ok(find_skills_recursive(target))
}

fn discover_repository(root: &Path) -> Result<Vec<PathBuf>> {
    let plugins_dir = root.join("plugins");
    let skills_dir = root.join("skills");

    if plugins_dir.is_dir() {
        let mut plugin_dirs: Vec<PathBuf> = std::fs::read_dir(&plugins_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        plugin_dirs.sort();

        Ok(plugin_dirs
            .iter()
            .map(|plugin| plugin.join("skills"))
            .filter(|skills| skills.is_dir())
            .flat_map(|skills| find_skills_recursive(&skills))
            .collect())
    } else if skills_dir.is_dir() {
        Ok(find_skills_recursive(&skills_dir))
    } else {
        Err(skills::no_skill_root(root.display().to_string()))
    }
}
