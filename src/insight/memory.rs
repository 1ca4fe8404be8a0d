//! Cross-run insight memory
//!
//! The memory is an explicit value: loaded at run start, mutated by the
//! miner, persisted by the caller at run end. One record per insight
//! signature tracks how confidence evolved across runs. Absent or
//! corrupt state never fails a run; it degrades to a fresh memory with
//! a warning.

use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Lowest confidence a first detection can seed
pub const SEED_CONFIDENCE_MIN: f64 = 0.4;
/// Highest confidence a first detection can seed
pub const SEED_CONFIDENCE_MAX: f64 = 0.6;
/// Added on re-detection, capped at 1.0
pub const CONFIDENCE_BOOST: f64 = 0.15;
/// Subtracted on a run without re-detection, floored at 0.0
pub const CONFIDENCE_DECAY: f64 = 0.1;
/// Consecutive unreinforced runs before a floored record is pruned
pub const RETENTION_RUNS: u32 = 5;

/// Cross-run state for one insight signature.
///
/// Every field carries a serde default so partially-written or legacy
/// state deserializes; `InsightMemory::load` then repairs ranges in one
/// normalization step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightRecord {
    /// Evolved confidence in [0, 1]
    #[serde(default)]
    pub confidence: f64,
    /// Run date of the first detection
    #[serde(default)]
    pub first_seen: Option<NaiveDate>,
    /// Run date of the most recent detection
    #[serde(default)]
    pub last_seen: Option<NaiveDate>,
    /// Number of runs that detected this insight
    #[serde(default)]
    pub hit_count: u32,
    /// Consecutive runs without re-detection
    #[serde(default)]
    pub misses: u32,
}

/// The persisted blob: signature-keyed records plus a run counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightMemory {
    /// Total completed mining runs
    #[serde(default)]
    pub runs: u64,
    /// One record per known insight signature
    #[serde(default)]
    pub records: BTreeMap<String, InsightRecord>,
}

impl InsightMemory {
    /// Load persisted memory from disk.
    ///
    /// A missing file is the normal first-run case and starts fresh
    /// silently. An unreadable or unparseable file is logged and
    /// discarded; state quality must never fail a run.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                tracing::warn!("Could not read insight state {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match serde_json::from_str::<InsightMemory>(&raw) {
            Ok(memory) => memory.normalized(),
            Err(err) => {
                tracing::warn!(
                    "Discarding corrupt insight state {}: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Persist the memory as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(self)?;
        fs::write(path, payload)?;
        tracing::debug!("Saved {} insight records to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Repair out-of-range values from hand-edited or legacy state.
    fn normalized(mut self) -> Self {
        for record in self.records.values_mut() {
            if !record.confidence.is_finite() {
                record.confidence = 0.0;
            }
            record.confidence = record.confidence.clamp(0.0, 1.0);
        }
        self
    }
}
