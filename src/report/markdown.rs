//! Markdown rendering of lint reports and mining outcomes

use crate::insight::{Insight, InsightCategory, MiningOutcome};
use crate::lint::{LintIssue, LintReport, Severity};

pub(crate) fn lint_markdown(report: &LintReport, show_suggestions: bool) -> String {
    let mut md = String::new();

    md.push_str("# Memory lint report\n\n");
    md.push_str(&format!("- Files scanned: {}\n", report.files_scanned));
    md.push_str(&format!("- Entries scanned: {}\n", report.entries_scanned));
    md.push_str(&format!("- Errors: {}\n", report.error_count()));
    md.push_str(&format!("- Warnings: {}\n", report.warning_count()));
    md.push_str(&format!("- Info: {}\n\n", report.info_count()));

    if report.issues.is_empty() {
        md.push_str("No issues found.\n");
        return md;
    }

    for (severity, heading) in [
        (Severity::Error, "## Errors\n\n"),
        (Severity::Warning, "## Warnings\n\n"),
        (Severity::Info, "## Info\n\n"),
    ] {
        let matching: Vec<&LintIssue> = report
            .issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect();
        if matching.is_empty() {
            continue;
        }

        md.push_str(heading);
        for issue in matching {
            md.push_str(&format!("### {}: {}\n\n", issue.id, issue.title));
            md.push_str(&format!("{}\n\n", issue.description));
            let files: Vec<&str> = issue.files.iter().map(String::as_str).collect();
            md.push_str(&format!("- Files: {}\n", files.join(", ")));
            for evidence in &issue.entries {
                md.push_str(&format!("- Evidence: {}\n", evidence));
            }
            if show_suggestions {
                if let Some(suggestion) = &issue.fix_suggestion {
                    md.push_str(&format!("- Suggested fix: {}\n", suggestion));
                }
            }
            md.push('\n');
        }
    }

    md
}

pub(crate) fn insights_markdown(outcome: &MiningOutcome) -> String {
    let mut md = String::new();

    md.push_str("# Insight report\n\n");
    md.push_str(&format!(
        "Run {}: {} insights ({} new, {} persistent, {} pruned)\n\n",
        outcome.memory.runs,
        outcome.insights.len(),
        outcome.new.len(),
        outcome.persistent.len(),
        outcome.pruned.len()
    ));

    if outcome.insights.is_empty() {
        md.push_str("No insights surfaced.\n");
    }

    for category in [
        InsightCategory::RecurringPattern,
        InsightCategory::Tension,
        InsightCategory::CrossConnection,
        InsightCategory::Opportunity,
    ] {
        let matching: Vec<&Insight> = outcome
            .insights
            .iter()
            .filter(|i| i.category == category)
            .collect();
        if matching.is_empty() {
            continue;
        }

        md.push_str(&format!("## {}\n\n", section_title(category)));
        for insight in matching {
            md.push_str(&format!(
                "- **{}** (confidence {:.2})\n",
                insight.title, insight.confidence
            ));
            md.push_str(&format!("  {}\n", insight.description));
            let refs: Vec<&str> = insight.sources.iter().map(String::as_str).collect();
            md.push_str(&format!("  Evidence: {}\n", refs.join(", ")));
        }
        md.push('\n');
    }

    if !outcome.pruned.is_empty() {
        md.push_str(&format!("Pruned this run: {}\n", outcome.pruned.join(", ")));
    }

    md
}

fn section_title(category: InsightCategory) -> &'static str {
    match category {
        InsightCategory::RecurringPattern => "Recurring patterns",
        InsightCategory::Tension => "Tensions",
        InsightCategory::CrossConnection => "Cross-connections",
        InsightCategory::Opportunity => "Opportunities",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::InsightMemory;
    use crate::lint::IssueCategory;
    use std::collections::BTreeSet;

    fn sample_report() -> LintReport {
        LintReport {
            files_scanned: 2,
            entries_scanned: 5,
            issues: vec![
                LintIssue {
                    id: "contradiction-001".to_string(),
                    severity: Severity::Error,
                    category: IssueCategory::Contradiction,
                    title: "Contradictory guidance about caching".to_string(),
                    description: "a.md and b.md take opposite stances".to_string(),
                    files: ["a.md".to_string(), "b.md".to_string()].into_iter().collect(),
                    entries: vec!["a.md#0: Must always keep caching enabled.".to_string()],
                    fix_suggestion: Some("Reconcile the two entries".to_string()),
                },
                LintIssue {
                    id: "orphan-001".to_string(),
                    severity: Severity::Warning,
                    category: IssueCategory::Orphan,
                    title: "Trace decision missing from the decision log".to_string(),
                    description: "trace.md#1 records a decision".to_string(),
                    files: ["trace.md".to_string()].into_iter().collect(),
                    entries: Vec::new(),
                    fix_suggestion: None,
                },
            ],
        }
    }

    fn sample_outcome() -> MiningOutcome {
        let mut memory = InsightMemory::default();
        memory.runs = 3;
        MiningOutcome {
            insights: vec![
                Insight {
                    title: "Recurring pattern: api, backoff, exponential".to_string(),
                    description: "3 entries across 2 files describe the same practice".to_string(),
                    category: InsightCategory::RecurringPattern,
                    sources: ["a.md#0".to_string(), "b.md#0".to_string()].into_iter().collect(),
                    confidence: 0.6,
                    signature: "recurring-pattern:api+backoff".to_string(),
                    latest_evidence: None,
                },
                Insight {
                    title: "Opportunity: no decision about retries".to_string(),
                    description: "Mentioned in 3 entries".to_string(),
                    category: InsightCategory::Opportunity,
                    sources: BTreeSet::new(),
                    confidence: 0.52,
                    signature: "opportunity:retries".to_string(),
                    latest_evidence: None,
                },
            ],
            new: vec!["opportunity:retries".to_string()],
            persistent: vec!["recurring-pattern:api+backoff".to_string()],
            pruned: vec!["tension:stale".to_string()],
            memory,
        }
    }

    #[test]
    fn test_lint_markdown_sections_and_counts() {
        let md = lint_markdown(&sample_report(), true);

        assert!(md.contains("# Memory lint report"));
        assert!(md.contains("- Errors: 1"));
        assert!(md.contains("- Warnings: 1"));
        assert!(md.contains("## Errors"));
        assert!(md.contains("## Warnings"));
        assert!(!md.contains("## Info"));
        assert!(md.contains("### contradiction-001: Contradictory guidance about caching"));
        assert!(md.contains("- Files: a.md, b.md"));
        assert!(md.contains("- Suggested fix: Reconcile the two entries"));
    }

    #[test]
    fn test_lint_markdown_suppresses_suggestions() {
        let md = lint_markdown(&sample_report(), false);
        assert!(!md.contains("Suggested fix"));
    }

    #[test]
    fn test_lint_markdown_clean_report() {
        let report = LintReport {
            files_scanned: 1,
            entries_scanned: 0,
            issues: Vec::new(),
        };
        let md = lint_markdown(&report, true);
        assert!(md.contains("No issues found."));
        assert!(!md.contains("## Errors"));
    }

    #[test]
    fn test_insights_markdown_grouping() {
        let md = insights_markdown(&sample_outcome());

        assert!(md.contains("# Insight report"));
        assert!(md.contains("Run 3: 2 insights (1 new, 1 persistent, 1 pruned)"));
        assert!(md.contains("## Recurring patterns"));
        assert!(md.contains("## Opportunities"));
        assert!(!md.contains("## Tensions"));
        assert!(md.contains("(confidence 0.60)"));
        assert!(md.contains("Pruned this run: tension:stale"));
    }

    #[test]
    fn test_insights_markdown_empty_outcome() {
        let outcome = MiningOutcome {
            insights: Vec::new(),
            new: Vec::new(),
            persistent: Vec::new(),
            pruned: Vec::new(),
            memory: InsightMemory::default(),
        };
        let md = insights_markdown(&outcome);
        assert!(md.contains("No insights surfaced."));
    }
}
