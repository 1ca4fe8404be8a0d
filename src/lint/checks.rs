//! The five consistency checks
//!
//! Each check is a pure pass over the prepared analysis context. They
//! run in a fixed order so reports and issue ids stay stable between
//! runs on the same corpus.

use super::issue::{IssueCategory, LintIssue, Severity};
use crate::analysis::{AnalysisContext, IndexedEntry};
use crate::config::LintConfig;
use crate::corpus::SourceKind;
use std::collections::BTreeSet;

/// One of the consistency checks the linter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCheck {
    /// Opposed stances on overlapping topics across files
    Contradictions,
    /// Near-identical entries across files
    Duplicates,
    /// Trace decisions absent from the decision log
    OrphanDecisions,
    /// Failure records with no matching learning
    FailuresWithoutLessons,
    /// Dated entries out of order within a file
    Chronology,
}

impl LintCheck {
    /// Every check, in report order.
    pub const ALL: [LintCheck; 5] = [
        LintCheck::Contradictions,
        LintCheck::Duplicates,
        LintCheck::OrphanDecisions,
        LintCheck::FailuresWithoutLessons,
        LintCheck::Chronology,
    ];

    /// Run this check over the context.
    pub fn run(&self, ctx: &AnalysisContext, config: &LintConfig) -> Vec<LintIssue> {
        match self {
            LintCheck::Contradictions => check_contradictions(ctx, config),
            LintCheck::Duplicates => check_duplicates(ctx, config),
            LintCheck::OrphanDecisions => check_orphan_decisions(ctx, config),
            LintCheck::FailuresWithoutLessons => check_failures_without_lessons(ctx, config),
            LintCheck::Chronology => check_chronology(ctx, config),
        }
    }
}

/// Issue skeleton; the linter assigns ids after all checks ran.
fn new_issue(
    category: IssueCategory,
    severity: Severity,
    title: String,
    description: String,
) -> LintIssue {
    LintIssue {
        id: String::new(),
        severity,
        category,
        title,
        description,
        files: BTreeSet::new(),
        entries: Vec::new(),
        fix_suggestion: None,
    }
}

/// Evidence line in `path#index: excerpt` form.
fn evidence(entry: &IndexedEntry, config: &LintConfig) -> String {
    format!(
        "{}: {}",
        entry.evidence_ref(),
        entry.entry.excerpt(config.max_excerpt_chars)
    )
}

/// Up to three shared keywords, sorted, as a topic label.
fn shared_topic(a: &BTreeSet<String>, b: &BTreeSet<String>) -> String {
    a.intersection(b)
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// The contradiction predicate, shared with the duplicate check so a
/// pair is never reported under both categories.
fn is_contradiction_pair(ctx: &AnalysisContext, i: usize, j: usize, config: &LintConfig) -> bool {
    let (a, b) = (&ctx.entries()[i], &ctx.entries()[j]);
    a.path() != b.path()
        && a.polarity.opposes(&b.polarity)
        && ctx.similarity(i, j) > config.contradiction_min_similarity
}

/// Cross-file pairs on the same topic with opposite stances.
fn check_contradictions(ctx: &AnalysisContext, config: &LintConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let entries = ctx.entries();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            if !is_contradiction_pair(ctx, i, j, config) {
                continue;
            }
            let (a, b) = (&entries[i], &entries[j]);
            let topic = shared_topic(&a.keywords, &b.keywords);

            let mut issue = new_issue(
                IssueCategory::Contradiction,
                Severity::Error,
                format!("Contradictory guidance about {}", topic),
                format!(
                    "{} and {} take opposite stances on the same topic (similarity {:.2})",
                    a.path(),
                    b.path(),
                    ctx.similarity(i, j)
                ),
            );
            issue.files.insert(a.path().to_string());
            issue.files.insert(b.path().to_string());
            issue.entries.push(evidence(a, config));
            issue.entries.push(evidence(b, config));
            issue.fix_suggestion = Some(
                "Reconcile the two entries or record which one supersedes the other".to_string(),
            );
            issues.push(issue);
        }
    }

    issues
}

/// Cross-file pairs that say nearly the same thing.
fn check_duplicates(ctx: &AnalysisContext, config: &LintConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let entries = ctx.entries();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (a, b) = (&entries[i], &entries[j]);
            if a.path() == b.path() {
                continue;
            }
            let similarity = ctx.similarity(i, j);
            if similarity <= config.duplicate_min_similarity {
                continue;
            }
            // Already reported as a contradiction
            if is_contradiction_pair(ctx, i, j, config) {
                continue;
            }

            let mut issue = new_issue(
                IssueCategory::Duplicate,
                Severity::Warning,
                format!("Near-duplicate entries about {}", shared_topic(&a.keywords, &b.keywords)),
                format!(
                    "{} and {} record nearly identical content (similarity {:.2})",
                    a.path(),
                    b.path(),
                    similarity
                ),
            );
            issue.files.insert(a.path().to_string());
            issue.files.insert(b.path().to_string());
            issue.entries.push(evidence(a, config));
            issue.entries.push(evidence(b, config));
            issue.fix_suggestion =
                Some("Keep one entry and fold the other into it".to_string());
            issues.push(issue);
        }
    }

    issues
}

/// Decision-marked trace entries with no counterpart in the decision
/// log. A corpus without any trace source skips this check entirely.
fn check_orphan_decisions(ctx: &AnalysisContext, config: &LintConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    if !ctx.sources().iter().any(|s| s.kind == SourceKind::Trace) {
        return issues;
    }

    let entries = ctx.entries();
    let decision_log: Vec<usize> = (0..entries.len())
        .filter(|&i| entries[i].kind() == SourceKind::Decisions)
        .collect();

    for i in 0..entries.len() {
        let entry = &entries[i];
        if entry.kind() != SourceKind::Trace || !entry.decision_marked {
            continue;
        }
        let linked = decision_log
            .iter()
            .any(|&d| ctx.similarity(i, d) > config.link_min_similarity);
        if linked {
            continue;
        }

        let mut issue = new_issue(
            IssueCategory::Orphan,
            Severity::Warning,
            "Trace decision missing from the decision log".to_string(),
            format!(
                "{} records a decision that no decision-log entry covers",
                entry.evidence_ref()
            ),
        );
        issue.files.insert(entry.path().to_string());
        issue.entries.push(evidence(entry, config));
        issue.fix_suggestion = Some("Promote the decision into the decision log".to_string());
        issues.push(issue);
    }

    issues
}

/// Failure records that no learning entry picks up.
fn check_failures_without_lessons(ctx: &AnalysisContext, config: &LintConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let entries = ctx.entries();
    let learnings: Vec<usize> = (0..entries.len())
        .filter(|&i| entries[i].kind() == SourceKind::Learnings)
        .collect();

    for i in 0..entries.len() {
        let entry = &entries[i];
        if entry.kind() != SourceKind::FailureRecord {
            continue;
        }
        let linked = learnings
            .iter()
            .any(|&l| ctx.similarity(i, l) > config.link_min_similarity);
        if linked {
            continue;
        }

        let mut issue = new_issue(
            IssueCategory::FailureWithoutLesson,
            Severity::Warning,
            "Failure has no recorded lesson".to_string(),
            format!(
                "{} describes a failure that no learning entry follows up on",
                entry.evidence_ref()
            ),
        );
        issue.files.insert(entry.path().to_string());
        issue.entries.push(evidence(entry, config));
        issue.fix_suggestion =
            Some("Capture what this failure taught in the learnings file".to_string());
        issues.push(issue);
    }

    issues
}

/// Per-file date order. Only files with enough dated entries are
/// judged; equal dates never count as an inversion.
fn check_chronology(ctx: &AnalysisContext, config: &LintConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    for source in ctx.sources() {
        let dated: Vec<_> = source.entries.iter().filter_map(|e| e.date).collect();
        if dated.len() < config.chronology_min_dated {
            continue;
        }

        let mut inversions = 0usize;
        for i in 0..dated.len() {
            for j in (i + 1)..dated.len() {
                if dated[i] > dated[j] {
                    inversions += 1;
                }
            }
        }
        if inversions == 0 {
            continue;
        }

        let mut issue = new_issue(
            IssueCategory::Chronological,
            Severity::Warning,
            "Entries out of chronological order".to_string(),
            format!(
                "Dated entries in {} do not follow their dates (inversions: {})",
                source.path, inversions
            ),
        );
        issue.files.insert(source.path.clone());
        issue.fix_suggestion = Some("Reorder the entries or fix their dates".to_string());
        issues.push(issue);
    }

    issues
}
