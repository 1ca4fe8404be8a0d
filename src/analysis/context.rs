//! Precomputed per-entry analysis facts
//!
//! Lint checks and insight detectors are pairwise over the whole
//! corpus, so keyword sets, polarity and temporal weights are computed
//! once up front. Checks then only do set intersections.

use super::keywords::extract_keywords;
use super::polarity::{detect_polarity, Polarity};
use super::similarity::jaccard;
use super::temporal::temporal_weight;
use crate::corpus::{MemoryEntry, Source, SourceKind};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Marker that tags a trace entry as a decision, e.g. `[DECISION] chose X`
static DECISION_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[decision\]").unwrap());

/// One corpus entry with its precomputed analysis facts.
#[derive(Debug)]
pub struct IndexedEntry<'a> {
    /// The source the entry came from
    pub source: &'a Source,
    /// The underlying entry
    pub entry: &'a MemoryEntry,
    /// Position of the entry within its source
    pub entry_index: usize,
    /// Normalized keyword set (decision marker stripped)
    pub keywords: BTreeSet<String>,
    /// Cue-based polarity of the raw text
    pub polarity: Polarity,
    /// Temporal weight of the entry relative to the run date
    pub weight: f64,
    /// Whether the raw text carries a `[DECISION]` marker
    pub decision_marked: bool,
}

impl IndexedEntry<'_> {
    /// Evidence reference in `path#index` form.
    pub fn evidence_ref(&self) -> String {
        format!("{}#{}", self.source.path, self.entry_index)
    }

    /// Kind of the owning source.
    pub fn kind(&self) -> SourceKind {
        self.source.kind
    }

    /// Path of the owning source.
    pub fn path(&self) -> &str {
        &self.source.path
    }
}

/// Flat, ordered view over all entries of all sources, with facts.
pub struct AnalysisContext<'a> {
    /// The run's reference date, injected by the caller
    pub today: NaiveDate,
    sources: &'a [Source],
    entries: Vec<IndexedEntry<'a>>,
}

impl<'a> AnalysisContext<'a> {
    /// Build the context, computing facts for every entry in source
    /// order. The sources themselves are never mutated.
    pub fn new(sources: &'a [Source], today: NaiveDate) -> Self {
        let mut entries = Vec::new();
        for source in sources {
            for (entry_index, entry) in source.entries.iter().enumerate() {
                let decision_marked = DECISION_MARKER_RE.is_match(&entry.text);
                let keyword_text = DECISION_MARKER_RE.replace_all(&entry.text, " ");

                entries.push(IndexedEntry {
                    source,
                    entry,
                    entry_index,
                    keywords: extract_keywords(&keyword_text),
                    polarity: detect_polarity(&entry.text),
                    weight: temporal_weight(entry.date, today),
                    decision_marked,
                });
            }
        }

        Self {
            today,
            sources,
            entries,
        }
    }

    /// All scanned sources.
    pub fn sources(&self) -> &'a [Source] {
        self.sources
    }

    /// All entries in deterministic source-then-entry order.
    pub fn entries(&self) -> &[IndexedEntry<'a>] {
        &self.entries
    }

    /// Keyword similarity between two entries by flat index.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        jaccard(&self.entries[i].keywords, &self.entries[j].keywords)
    }
}
