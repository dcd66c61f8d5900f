//! Content checks shared by the skill validator and the release gate:
//! local markdown links and shell script permissions.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

#[allow(clippy::expect_used)]
static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("markdown link pattern is a valid literal")
});

/// Link targets in markdown `content` that point at local files.
///
/// External URLs, `mailto:` links and in-page anchors are skipped. A
/// trailing `#fragment` and an optional link title are removed. Targets in
/// `<...>` are taken whole, so they may contain spaces.
pub fn local_links(content: &str) -> Vec<String> {
    MARKDOWN_LINK
        .captures_iter(content)
        .filter_map(|caps| caps.get(2))
        .filter_map(|target| {
            let target = target.as_str().trim();
            let target = match target.strip_prefix('<') {
                Some(rest) => rest.split('>').next().unwrap_or(rest),
                None => target.split_whitespace().next().unwrap_or(target),
            };
            if target.starts_with("http") || target.starts_with('#') || target.starts_with("mailto:")
            {
                return None;
            }
            let path = target.split('#').next().unwrap_or(target);
            if path.is_empty() {
                None
            } else {
                Some(path.to_string())
            }
        })
        .collect()
}

/// Local links in `content` that do not resolve relative to `base_dir`
pub fn broken_links(base_dir: &Path, content: &str) -> Vec<String> {
    local_links(content)
        .into_iter()
        .filter(|link| !base_dir.join(link).exists())
        .collect()
}

/// Files under `dir` whose path relative to `dir` matches `pattern`, sorted
pub fn files_matching(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let Ok(glob) = Glob::new(pattern) else {
        tracing::warn!(pattern, "invalid glob pattern");
        return Vec::new();
    };

    let mut matches: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let Ok(relative) = entry.path().strip_prefix(dir) else {
                return false;
            };
            let path_str = relative.to_string_lossy().replace('\\', "/");
            glob.matched(&CandidatePath::from(path_str.as_str())).is_some()
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    matches.sort();
    matches
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Shell scripts under `<skill_dir>/scripts` without an execute bit
pub fn non_executable_scripts(skill_dir: &Path) -> Vec<PathBuf> {
    let scripts_dir = skill_dir.join("scripts");
    if !scripts_dir.is_dir() {
        return Vec::new();
    }

    files_matching(&scripts_dir, "**/*.sh")
        .into_iter()
        .filter(|script| !is_executable(script))
        .collect()
}
