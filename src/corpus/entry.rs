//! A single dated or undated record within a source file

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One memory record: an optional date and its free text.
///
/// Immutable per run. A date that was present but unparseable in the
/// underlying file degrades to `None` rather than failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Entry date, when one could be parsed
    pub date: Option<NaiveDate>,
    /// The raw entry text
    pub text: String,
}

impl MemoryEntry {
    /// Create an undated entry.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            date: None,
            text: text.into(),
        }
    }

    /// Create a dated entry.
    pub fn dated(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date: Some(date),
            text: text.into(),
        }
    }

    /// A display excerpt of the entry text, truncated on a character
    /// boundary.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let trimmed = self.text.trim();
        if trimmed.chars().count() <= max_chars {
            return trimmed.to_string();
        }
        let cut: String = trimmed.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}
