//! Memory corpus linter
//!
//! Runs the fixed check pipeline over a prepared analysis context and
//! folds the findings into a single report with stable issue ids.

mod checks;
mod issue;

pub use checks::LintCheck;
pub use issue::{IssueCategory, LintIssue, LintReport, Severity};

use crate::analysis::AnalysisContext;
use crate::config::LintConfig;
use std::collections::BTreeMap;

/// Runs every consistency check and assembles the lint report.
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// Run the full check pipeline over a prepared context.
    ///
    /// Issues come out in check order, which puts contradictions (the
    /// only error-severity category) first.
    pub fn run(&self, ctx: &AnalysisContext) -> LintReport {
        let mut issues = Vec::new();
        for check in LintCheck::ALL {
            issues.extend(check.run(ctx, &self.config));
        }
        assign_ids(&mut issues);

        let report = LintReport {
            files_scanned: ctx.sources().len(),
            entries_scanned: ctx.entries().len(),
            issues,
        };
        tracing::info!(
            "Lint finished: {} errors, {} warnings across {} entries",
            report.error_count(),
            report.warning_count(),
            report.entries_scanned
        );
        report
    }
}

/// Number issues per category in emission order: `contradiction-001`,
/// `contradiction-002`, `duplicate-001` and so on.
fn assign_ids(issues: &mut [LintIssue]) {
    let mut counters: BTreeMap<&'static str, usize> = BTreeMap::new();
    for issue in issues.iter_mut() {
        let counter = counters.entry(issue.category.as_str()).or_insert(0);
        *counter += 1;
        issue.id = format!("{}-{:03}", issue.category.as_str(), counter);
    }
}
