//! Parse the YAML frontmatter block at the top of SKILL.md.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Why a SKILL.md frontmatter block could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    #[error("SKILL.md must start with YAML frontmatter (---)")]
    MissingOpening,

    #[error("Invalid frontmatter: missing closing ---")]
    MissingClosing,

    #[error("Invalid frontmatter YAML: {0}")]
    InvalidYaml(String),

    #[error("Invalid frontmatter: expected key/value pairs")]
    NotAMapping,
}

/// Top-level frontmatter keys and values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    mapping: Mapping,
}

impl Frontmatter {
    fn value(&self, key: &str) -> Option<&Value> {
        self.mapping
            .get(Value::String(key.to_string()))
            .filter(|v| !v.is_null())
    }

    /// True when `key` is present with a non-null value
    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Scalar value of `key` rendered as a string.
    ///
    /// Numbers and booleans are stringified (`version: 1.0` is common);
    /// sequences and mappings yield `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.value(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Split content into frontmatter (between the first `---` line and the next
/// `---` line) and body.
pub fn split(content: &str) -> Result<(Frontmatter, String), FrontmatterError> {
    let mut lines = content.lines();
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return Err(FrontmatterError::MissingOpening),
    }

    let rest: Vec<&str> = lines.collect();
    let end_idx = rest
        .iter()
        .position(|l| l.trim_end() == "---")
        .ok_or(FrontmatterError::MissingClosing)?;

    let frontmatter_str = rest[..end_idx].join("\n");
    let body = rest[end_idx + 1..].join("\n");

    let value: Value = serde_yaml::from_str(&frontmatter_str)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    let mapping = match value {
        Value::Mapping(m) => m,
        Value::Null => Mapping::new(),
        _ => return Err(FrontmatterError::NotAMapping),
    };

    Ok((Frontmatter { mapping }, body))
}
