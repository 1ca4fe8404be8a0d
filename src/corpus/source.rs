//! Source files and their kinds

use super::entry::MemoryEntry;
use serde::{Deserialize, Serialize};

/// The kind of operational record a source file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Accumulated lessons and working knowledge
    Learnings,
    /// The formal decision log
    Decisions,
    /// Recorded failures and incidents
    FailureRecord,
    /// Session or execution traces
    Trace,
    /// Logged contradictions awaiting resolution
    ContradictionLog,
}

impl SourceKind {
    /// Kebab-case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Learnings => "learnings",
            SourceKind::Decisions => "decisions",
            SourceKind::FailureRecord => "failure-record",
            SourceKind::Trace => "trace",
            SourceKind::ContradictionLog => "contradiction-log",
        }
    }

    /// Infer the kind from a file stem or directory name.
    ///
    /// Matching is substring-based so `team-decisions`, `decision_log`
    /// and `decisions` all map to [`SourceKind::Decisions`]. Returns
    /// `None` for names that match no known kind.
    pub fn infer_from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        // Contradiction logs first: "contradiction" contains no other marker,
        // but a name like "trace-contradictions" should stay a contradiction log.
        if name.contains("contradiction") {
            Some(SourceKind::ContradictionLog)
        } else if name.contains("learning") || name.contains("lesson") {
            Some(SourceKind::Learnings)
        } else if name.contains("decision") {
            Some(SourceKind::Decisions)
        } else if name.contains("failure") || name.contains("incident") {
            Some(SourceKind::FailureRecord)
        } else if name.contains("session") || name.contains("trace") {
            Some(SourceKind::Trace)
        } else {
            None
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scanned source file: its path, kind, and ordered entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// Path of the file, relative to the scanned root
    pub path: String,
    /// What kind of record the file holds
    pub kind: SourceKind,
    /// Entries in file order
    pub entries: Vec<MemoryEntry>,
}

impl Source {
    /// Create a source with the given entries.
    pub fn new(path: impl Into<String>, kind: SourceKind, entries: Vec<MemoryEntry>) -> Self {
        Self {
            path: path.into(),
            kind,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_from_name() {
        assert_eq!(
            SourceKind::infer_from_name("learnings"),
            Some(SourceKind::Learnings)
        );
        assert_eq!(
            SourceKind::infer_from_name("team-decisions"),
            Some(SourceKind::Decisions)
        );
        assert_eq!(
            SourceKind::infer_from_name("failure_log"),
            Some(SourceKind::FailureRecord)
        );
        assert_eq!(
            SourceKind::infer_from_name("session-2024-01"),
            Some(SourceKind::Trace)
        );
        assert_eq!(
            SourceKind::infer_from_name("traces"),
            Some(SourceKind::Trace)
        );
        assert_eq!(
            SourceKind::infer_from_name("contradiction-log"),
            Some(SourceKind::ContradictionLog)
        );
        assert_eq!(SourceKind::infer_from_name("README"), None);
    }

    #[test]
    fn test_infer_contradiction_wins_over_trace() {
        assert_eq!(
            SourceKind::infer_from_name("trace-contradictions"),
            Some(SourceKind::ContradictionLog)
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&SourceKind::FailureRecord).unwrap();
        assert_eq!(json, "\"failure-record\"");
        let back: SourceKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SourceKind::FailureRecord);
    }

    #[test]
    fn test_as_str_matches_display() {
        for kind in [
            SourceKind::Learnings,
            SourceKind::Decisions,
            SourceKind::FailureRecord,
            SourceKind::Trace,
            SourceKind::ContradictionLog,
        ] {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
