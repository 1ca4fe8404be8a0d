//! Insight mining
//!
//! Four detectors surface emergent observations from the corpus; a
//! signature-keyed memory carries their confidence across runs. The
//! miner ties both together: detect, merge, decay, prune, rank.

mod detectors;
mod insight;
mod memory;
mod miner;

pub use detectors::InsightDetector;
pub use insight::{Insight, InsightCategory};
pub use memory::{
    InsightMemory, InsightRecord, CONFIDENCE_BOOST, CONFIDENCE_DECAY, RETENTION_RUNS,
    SEED_CONFIDENCE_MAX, SEED_CONFIDENCE_MIN,
};
pub use miner::{Miner, MiningOutcome};
