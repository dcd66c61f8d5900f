//! Validation findings
//!
//! Every validator collects [`Finding`]s into a [`Report`] instead of failing
//! fast, so a single run surfaces every problem in the repository. A report
//! is valid when it holds no [`Severity::Error`] findings.

pub mod display;

use serde::Serialize;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single message produced by a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// Ordered collection of findings
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(?severity, %message, "finding");
        self.findings.push(Finding { severity, message });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    /// Push an error or a warning depending on `strict`
    pub fn strict_error(&mut self, strict: bool, message: impl Into<String>) {
        if strict {
            self.error(message);
        } else {
            self.warning(message);
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.findings
            .iter()
            .filter(move |f| f.severity == severity)
            .map(|f| f.message.as_str())
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages(Severity::Error).collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Severity::Warning).collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.messages(Severity::Info).collect()
    }

    pub fn error_count(&self) -> usize {
        self.messages(Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages(Severity::Warning).count()
    }

    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}

/// Output format for validation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    #[default]
    Text,
    /// Machine-readable JSON on stdout
    Json,
}
