//! JSON rendering of lint reports and mining outcomes

use crate::error::Result;
use crate::insight::MiningOutcome;
use crate::lint::LintReport;
use serde_json::json;

pub(crate) fn lint_json(report: &LintReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub(crate) fn insights_json(outcome: &MiningOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn combined_json(report: &LintReport, outcome: &MiningOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "lint": report,
        "insights": outcome,
    }))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::{Insight, InsightCategory, InsightMemory};
    use crate::lint::{IssueCategory, LintIssue, Severity};

    fn sample_report() -> LintReport {
        LintReport {
            files_scanned: 1,
            entries_scanned: 2,
            issues: vec![LintIssue {
                id: "duplicate-001".to_string(),
                severity: Severity::Warning,
                category: IssueCategory::Duplicate,
                title: "Near-duplicate entries about logging".to_string(),
                description: "a.md and b.md record nearly identical content".to_string(),
                files: ["a.md".to_string(), "b.md".to_string()].into_iter().collect(),
                entries: Vec::new(),
                fix_suggestion: None,
            }],
        }
    }

    fn sample_outcome() -> MiningOutcome {
        MiningOutcome {
            insights: vec![Insight {
                title: "Unresolved tension about caching".to_string(),
                description: "opposed stances".to_string(),
                category: InsightCategory::Tension,
                sources: ["a.md#0".to_string()].into_iter().collect(),
                confidence: 0.47,
                signature: "tension:caching".to_string(),
                latest_evidence: None,
            }],
            new: vec!["tension:caching".to_string()],
            persistent: Vec::new(),
            pruned: Vec::new(),
            memory: InsightMemory::default(),
        }
    }

    #[test]
    fn test_lint_json_round_trip() {
        let rendered = lint_json(&sample_report()).unwrap();
        let parsed: LintReport = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed.files_scanned, 1);
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].id, "duplicate-001");
        assert_eq!(parsed.issues[0].category, IssueCategory::Duplicate);
    }

    #[test]
    fn test_insights_json_omits_memory() {
        let rendered = insights_json(&sample_outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert!(value.get("insights").is_some());
        assert!(value.get("new").is_some());
        // The memory travels to the state file, not the report
        assert!(value.get("memory").is_none());
        assert_eq!(value["insights"][0]["category"], "tension");
    }

    #[test]
    fn test_combined_json_has_both_sections() {
        let rendered = combined_json(&sample_report(), &sample_outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["lint"]["files_scanned"], 1);
        assert_eq!(value["insights"]["new"][0], "tension:caching");
    }
}
