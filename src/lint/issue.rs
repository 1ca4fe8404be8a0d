//! Lint issue and report types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How serious a lint finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Must be resolved; fails CI runs
    Error,
    /// Should be looked at
    Warning,
    /// Informational only
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// The kind of consistency problem an issue reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    /// Opposed stances on the same topic across files
    Contradiction,
    /// Near-identical entries across files
    Duplicate,
    /// A trace decision missing from the decision log
    Orphan,
    /// A recorded failure with no matching learning
    FailureWithoutLesson,
    /// Dated entries out of order within one file
    Chronological,
}

impl IssueCategory {
    /// Kebab-case slug, also used as the issue id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Contradiction => "contradiction",
            IssueCategory::Duplicate => "duplicate",
            IssueCategory::Orphan => "orphan",
            IssueCategory::FailureWithoutLesson => "failure-without-lesson",
            IssueCategory::Chronological => "chronological",
        }
    }
}

/// A single consistency finding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintIssue {
    /// Deterministic id: `{category}-{ordinal}` in emission order
    pub id: String,
    /// Finding severity
    pub severity: Severity,
    /// Finding category
    pub category: IssueCategory,
    /// Short summary line
    pub title: String,
    /// Full description
    pub description: String,
    /// Files involved, sorted
    pub files: BTreeSet<String>,
    /// Evidence excerpts, `path#index: text`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<String>,
    /// Suggested remediation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_suggestion: Option<String>,
}

/// Aggregate result of one lint run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    /// Number of source files inspected
    pub files_scanned: usize,
    /// Number of entries inspected
    pub entries_scanned: usize,
    /// All findings, errors first in check order
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    /// Number of error-severity issues.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning-severity issues.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of info-severity issues.
    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    /// Whether any error-severity issue was found.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}
