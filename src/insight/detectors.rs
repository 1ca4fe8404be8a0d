//! The four insight detectors
//!
//! Detectors are pure passes over the analysis context. Each emits
//! candidate insights whose `confidence` field carries raw evidence
//! strength in [0, 1]; the miner turns that into seeded or remembered
//! confidence afterwards. Emission order is deterministic.

use super::insight::{Insight, InsightCategory};
use crate::analysis::{AnalysisContext, IndexedEntry};
use crate::config::InsightConfig;
use crate::corpus::SourceKind;
use std::collections::{BTreeMap, BTreeSet};

/// Five entries of fresh evidence saturate an evidence-count strength
const EVIDENCE_SATURATION: f64 = 5.0;

/// One of the emergent-observation detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightDetector {
    /// Clusters of entries recording the same practice
    RecurringPatterns,
    /// Weakly-linked opposed stances
    Tensions,
    /// Topics bridging different source kinds
    CrossConnections,
    /// Much-mentioned topics with no decision
    Opportunities,
}

impl InsightDetector {
    /// Every detector, in emission order.
    pub const ALL: [InsightDetector; 4] = [
        InsightDetector::RecurringPatterns,
        InsightDetector::Tensions,
        InsightDetector::CrossConnections,
        InsightDetector::Opportunities,
    ];

    /// Run this detector over the context.
    pub fn run(&self, ctx: &AnalysisContext, config: &InsightConfig) -> Vec<Insight> {
        match self {
            InsightDetector::RecurringPatterns => detect_recurring_patterns(ctx, config),
            InsightDetector::Tensions => detect_tensions(ctx, config),
            InsightDetector::CrossConnections => detect_cross_connections(ctx, config),
            InsightDetector::Opportunities => detect_opportunities(ctx, config),
        }
    }
}

/// Up to three defining keywords, sorted, as a topic label.
fn topic_label(keywords: &BTreeSet<String>) -> String {
    keywords
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

fn shared_keywords(a: &IndexedEntry, b: &IndexedEntry) -> BTreeSet<String> {
    a.keywords.intersection(&b.keywords).cloned().collect()
}

/// Greedy clustering of entries whose keyword sets mutually overlap.
/// A cluster only counts when it has at least three members spanning at
/// least two files; each entry belongs to at most one emitted cluster.
fn detect_recurring_patterns(ctx: &AnalysisContext, config: &InsightConfig) -> Vec<Insight> {
    let entries = ctx.entries();
    let mut assigned = vec![false; entries.len()];
    let mut insights = Vec::new();

    for seed in 0..entries.len() {
        if assigned[seed] || entries[seed].keywords.is_empty() {
            continue;
        }
        let mut cluster = vec![seed];
        for candidate in (seed + 1)..entries.len() {
            if assigned[candidate] {
                continue;
            }
            let coherent = cluster
                .iter()
                .all(|&member| ctx.similarity(member, candidate) > config.pattern_min_similarity);
            if coherent {
                cluster.push(candidate);
            }
        }

        if cluster.len() < 3 {
            continue;
        }
        let files: BTreeSet<&str> = cluster.iter().map(|&i| entries[i].path()).collect();
        if files.len() < 2 {
            continue;
        }
        for &member in &cluster {
            assigned[member] = true;
        }

        // Keywords every member shares; the seed's own set if the
        // running intersection came up empty
        let mut common = entries[cluster[0]].keywords.clone();
        for &member in &cluster[1..] {
            common = common
                .intersection(&entries[member].keywords)
                .cloned()
                .collect();
        }
        let defining = if common.is_empty() {
            entries[cluster[0]].keywords.clone()
        } else {
            common
        };

        let strength = (cluster.iter().map(|&i| entries[i].weight).sum::<f64>()
            / EVIDENCE_SATURATION)
            .min(1.0);

        insights.push(Insight {
            title: format!("Recurring pattern: {}", topic_label(&defining)),
            description: format!(
                "{} entries across {} files describe the same practice",
                cluster.len(),
                files.len()
            ),
            category: InsightCategory::RecurringPattern,
            sources: cluster.iter().map(|&i| entries[i].evidence_ref()).collect(),
            confidence: strength,
            signature: Insight::signature_of(InsightCategory::RecurringPattern, &defining),
            latest_evidence: cluster.iter().filter_map(|&i| entries[i].entry.date).max(),
        });
    }

    insights
}

/// Cross-file opposed pairs at a softer threshold than the linter's
/// contradiction check. Exploratory, not an error.
fn detect_tensions(ctx: &AnalysisContext, config: &InsightConfig) -> Vec<Insight> {
    let entries = ctx.entries();
    let mut insights = Vec::new();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (a, b) = (&entries[i], &entries[j]);
            if a.path() == b.path() || !a.polarity.opposes(&b.polarity) {
                continue;
            }
            let similarity = ctx.similarity(i, j);
            if similarity <= config.tension_min_similarity {
                continue;
            }

            let defining = shared_keywords(a, b);
            let strength = similarity * (a.weight + b.weight) / 2.0;
            insights.push(Insight {
                title: format!("Unresolved tension about {}", topic_label(&defining)),
                description: format!(
                    "{} and {} pull in opposite directions on the same topic (similarity {:.2})",
                    a.path(),
                    b.path(),
                    similarity
                ),
                category: InsightCategory::Tension,
                sources: [a.evidence_ref(), b.evidence_ref()].into_iter().collect(),
                confidence: strength,
                signature: Insight::signature_of(InsightCategory::Tension, &defining),
                latest_evidence: a.entry.date.max(b.entry.date),
            });
        }
    }

    insights
}

/// Pairs from two different kinds of sources sharing a topic.
fn detect_cross_connections(ctx: &AnalysisContext, config: &InsightConfig) -> Vec<Insight> {
    let entries = ctx.entries();
    let mut insights = Vec::new();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (a, b) = (&entries[i], &entries[j]);
            if a.kind() == b.kind() {
                continue;
            }
            let similarity = ctx.similarity(i, j);
            if similarity <= config.cross_connection_min_similarity {
                continue;
            }

            let defining = shared_keywords(a, b);
            let strength = similarity * (a.weight + b.weight) / 2.0;
            insights.push(Insight {
                title: format!("Cross-source connection: {}", topic_label(&defining)),
                description: format!(
                    "{} and {} sources both touch this topic (similarity {:.2})",
                    a.kind().as_str(),
                    b.kind().as_str(),
                    similarity
                ),
                category: InsightCategory::CrossConnection,
                sources: [a.evidence_ref(), b.evidence_ref()].into_iter().collect(),
                confidence: strength,
                signature: Insight::signature_of(InsightCategory::CrossConnection, &defining),
                latest_evidence: a.entry.date.max(b.entry.date),
            });
        }
    }

    insights
}

/// Keywords mentioned across enough distinct entries that never show up
/// in a Decisions entry or a decision-marked Trace entry.
fn detect_opportunities(ctx: &AnalysisContext, config: &InsightConfig) -> Vec<Insight> {
    let entries = ctx.entries();

    let mut mentions: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (i, entry) in entries.iter().enumerate() {
        for keyword in &entry.keywords {
            mentions.entry(keyword).or_default().push(i);
        }
    }

    let decided: BTreeSet<&str> = entries
        .iter()
        .filter(|e| {
            e.kind() == SourceKind::Decisions || (e.kind() == SourceKind::Trace && e.decision_marked)
        })
        .flat_map(|e| e.keywords.iter().map(String::as_str))
        .collect();

    let mut insights = Vec::new();
    for (keyword, hits) in mentions {
        if hits.len() < config.opportunity_min_mentions || decided.contains(keyword) {
            continue;
        }

        let defining: BTreeSet<String> = [keyword.to_string()].into_iter().collect();
        let strength = (hits.iter().map(|&i| entries[i].weight).sum::<f64>()
            / EVIDENCE_SATURATION)
            .min(1.0);
        insights.push(Insight {
            title: format!("Opportunity: no decision about {}", keyword),
            description: format!(
                "Mentioned in {} entries but absent from every decision record",
                hits.len()
            ),
            category: InsightCategory::Opportunity,
            sources: hits.iter().map(|&i| entries[i].evidence_ref()).collect(),
            confidence: strength,
            signature: Insight::signature_of(InsightCategory::Opportunity, &defining),
            latest_evidence: hits.iter().filter_map(|&i| entries[i].entry.date).max(),
        });
    }

    insights
}
