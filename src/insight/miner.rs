//! The mining pipeline: detect, merge with memory, decay, prune, rank
//!
//! One run takes the prepared analysis context plus the loaded memory
//! value, runs every detector, folds the candidates into the memory by
//! signature, ages out everything that was not re-detected, and returns
//! the ranked insights together with the updated memory. The caller
//! decides whether and where to persist the memory.

use super::detectors::InsightDetector;
use super::insight::Insight;
use super::memory::{
    InsightMemory, InsightRecord, CONFIDENCE_BOOST, CONFIDENCE_DECAY, RETENTION_RUNS,
    SEED_CONFIDENCE_MAX, SEED_CONFIDENCE_MIN,
};
use crate::analysis::{temporal_weight, AnalysisContext};
use crate::config::InsightConfig;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Result of one mining run.
#[derive(Debug, Clone, Serialize)]
pub struct MiningOutcome {
    /// Ranked insights, capped at the configured maximum
    pub insights: Vec<Insight>,
    /// Signatures first seen this run
    pub new: Vec<String>,
    /// Signatures re-detected from earlier runs
    pub persistent: Vec<String>,
    /// Signatures dropped this run
    pub pruned: Vec<String>,
    /// The updated memory, for the caller to persist
    #[serde(skip)]
    pub memory: InsightMemory,
}

/// Drives one full mining run.
pub struct Miner {
    config: InsightConfig,
}

impl Miner {
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, ctx: &AnalysisContext, mut memory: InsightMemory) -> MiningOutcome {
        let today = ctx.today;

        let mut candidates = Vec::new();
        for detector in InsightDetector::ALL {
            candidates.extend(detector.run(ctx, &self.config));
        }
        // The same signature sighted twice in one run collapses onto
        // its first sighting
        let mut seen = BTreeSet::new();
        candidates.retain(|c| seen.insert(c.signature.clone()));

        let detected: BTreeSet<String> = candidates.iter().map(|c| c.signature.clone()).collect();

        let mut new = Vec::new();
        let mut persistent = Vec::new();
        let mut insights = Vec::new();
        for mut candidate in candidates {
            match memory.records.get_mut(&candidate.signature) {
                Some(record) => {
                    record.confidence = (record.confidence + CONFIDENCE_BOOST).min(1.0);
                    record.hit_count += 1;
                    record.misses = 0;
                    record.last_seen = Some(today);
                    candidate.confidence = record.confidence;
                    persistent.push(candidate.signature.clone());
                }
                None => {
                    let seeded = seed_confidence(candidate.confidence);
                    memory.records.insert(
                        candidate.signature.clone(),
                        InsightRecord {
                            confidence: seeded,
                            first_seen: Some(today),
                            last_seen: Some(today),
                            hit_count: 1,
                            misses: 0,
                        },
                    );
                    candidate.confidence = seeded;
                    new.push(candidate.signature.clone());
                }
            }
            insights.push(candidate);
        }

        for (signature, record) in memory.records.iter_mut() {
            if detected.contains(signature) {
                continue;
            }
            record.confidence = (record.confidence - CONFIDENCE_DECAY).max(0.0);
            record.misses += 1;
        }
        let mut pruned = Vec::new();
        memory.records.retain(|signature, record| {
            let expired = record.misses >= RETENTION_RUNS && record.confidence <= 0.0;
            if expired {
                pruned.push(signature.clone());
            }
            !expired
        });

        memory.runs += 1;

        insights.sort_by(|a, b| {
            rank_score(b, today)
                .partial_cmp(&rank_score(a, today))
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.signature.cmp(&b.signature))
        });
        insights.truncate(self.config.max_insights);

        tracing::info!(
            "Mining run {}: {} insights ({} new, {} persistent, {} pruned)",
            memory.runs,
            insights.len(),
            new.len(),
            persistent.len(),
            pruned.len()
        );

        MiningOutcome {
            insights,
            new,
            persistent,
            pruned,
            memory,
        }
    }
}

/// Map raw evidence strength onto the seed confidence band. A first
/// detection never starts above `SEED_CONFIDENCE_MAX`.
fn seed_confidence(strength: f64) -> f64 {
    let strength = if strength.is_finite() {
        strength.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let span = SEED_CONFIDENCE_MAX - SEED_CONFIDENCE_MIN;
    (SEED_CONFIDENCE_MIN + span * strength).clamp(SEED_CONFIDENCE_MIN, SEED_CONFIDENCE_MAX)
}

/// Remembered confidence discounted by evidence age.
fn rank_score(insight: &Insight, today: NaiveDate) -> f64 {
    insight.confidence * temporal_weight(insight.latest_evidence, today)
}
