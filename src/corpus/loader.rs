//! Corpus loading from a memory directory
//!
//! Walks the directory for record files, infers each file's kind from
//! its name (or a parent directory's name), and splits markdown into
//! entries. Bullet lines start new entries; headings and blank lines
//! close the current one; other lines continue it. Unreadable files are
//! skipped with a warning, never failing the run. A missing root is a
//! caller error and does fail.

use crate::config::ScanConfig;
use crate::corpus::{MemoryEntry, Source, SourceKind};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use walkdir::WalkDir;

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap());

/// Directory scanner producing the ordered source sequence.
pub struct CorpusLoader {
    config: ScanConfig,
}

impl CorpusLoader {
    /// Create a loader with the given scan configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root` and return all recognized sources in file-name order.
    pub fn load(&self, root: &Path) -> Result<Vec<Source>> {
        if !root.is_dir() {
            return Err(Error::Corpus(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut walker = WalkDir::new(root).sort_by_file_name();
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut sources = Vec::new();
        for dir_entry in walker {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("Skipping unreadable path: {}", e);
                    continue;
                }
            };
            if !dir_entry.file_type().is_file() {
                continue;
            }

            let path = dir_entry.path();
            if !self.config.include_hidden && is_hidden(root, path) {
                continue;
            }
            if !self.has_known_extension(path) {
                continue;
            }
            let Some(kind) = infer_kind(root, path) else {
                tracing::debug!("Skipping {}: no recognizable record kind", path.display());
                continue;
            };

            let text = match std::fs::read_to_string(path) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };

            let entries = split_entries(&text);
            let rel = path.strip_prefix(root).unwrap_or(path);
            tracing::debug!(
                "Loaded {} as {} ({} entries)",
                rel.display(),
                kind,
                entries.len()
            );
            sources.push(Source::new(rel.to_string_lossy(), kind, entries));
        }

        Ok(sources)
    }

    fn has_known_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_lowercase();
        self.config.extensions.iter().any(|known| known == &ext)
    }
}

/// Whether any path component below the root starts with a dot.
fn is_hidden(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components().any(|c| {
        c.as_os_str()
            .to_string_lossy()
            .starts_with('.')
    })
}

/// Infer the record kind from the file stem, falling back to parent
/// directory names between the root and the file.
fn infer_kind(root: &Path, path: &Path) -> Option<SourceKind> {
    let stem = path.file_stem()?.to_string_lossy();
    if let Some(kind) = SourceKind::infer_from_name(&stem) {
        return Some(kind);
    }

    let rel = path.strip_prefix(root).ok()?;
    for component in rel.components() {
        if let Some(kind) = SourceKind::infer_from_name(&component.as_os_str().to_string_lossy()) {
            return Some(kind);
        }
    }
    None
}

/// Split file text into entries.
fn split_entries(text: &str) -> Vec<MemoryEntry> {
    let mut entries = Vec::new();
    let mut buffer = String::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            flush(&mut buffer, &mut entries);
            continue;
        }
        if let Some(rest) = bullet_text(trimmed) {
            flush(&mut buffer, &mut entries);
            buffer.push_str(rest);
        } else {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(trimmed);
        }
    }
    flush(&mut buffer, &mut entries);

    entries
}

fn bullet_text(line: &str) -> Option<&str> {
    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest.trim());
        }
    }
    None
}

fn flush(buffer: &mut String, entries: &mut Vec<MemoryEntry>) {
    let text = buffer.trim();
    if !text.is_empty() {
        entries.push(MemoryEntry {
            date: extract_date(text),
            text: text.to_string(),
        });
    }
    buffer.clear();
}

/// The first ISO-like date in the text, if it is a valid calendar date.
fn extract_date(text: &str) -> Option<NaiveDate> {
    let caps = ISO_DATE_RE.captures(text)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn loader() -> CorpusLoader {
        CorpusLoader::new(ScanConfig::default())
    }

    #[test]
    fn test_kind_inference_from_file_names() {
        let dir = TempDir::new().unwrap();
        write(&dir, "learnings.md", "- note");
        write(&dir, "team-decisions.md", "- chose X");
        write(&dir, "failures.md", "- broke Y");
        write(&dir, "session-2024.md", "- ran Z");
        write(&dir, "contradictions.md", "- conflict");
        write(&dir, "notes.md", "- unclassified");

        let sources = loader().load(dir.path()).unwrap();
        assert_eq!(sources.len(), 5);

        let kinds: Vec<SourceKind> = sources.iter().map(|s| s.kind).collect();
        assert!(kinds.contains(&SourceKind::Learnings));
        assert!(kinds.contains(&SourceKind::Decisions));
        assert!(kinds.contains(&SourceKind::FailureRecord));
        assert!(kinds.contains(&SourceKind::Trace));
        assert!(kinds.contains(&SourceKind::ContradictionLog));
        assert!(!sources.iter().any(|s| s.path == "notes.md"));
    }

    #[test]
    fn test_kind_inference_from_parent_dir() {
        let dir = TempDir::new().unwrap();
        write(&dir, "decisions/2024-q1.md", "- adopted Rust");

        let sources = loader().load(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].kind, SourceKind::Decisions);
    }

    #[test]
    fn test_bullet_and_paragraph_splitting() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "learnings.md",
            "# Lessons\n\n- first item\n- second item\n\nparagraph text\ncontinues here\n",
        );

        let sources = loader().load(dir.path()).unwrap();
        let entries = &sources[0].entries;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text, "first item");
        assert_eq!(entries[1].text, "second item");
        assert_eq!(entries[2].text, "paragraph text continues here");
    }

    #[test]
    fn test_date_extraction() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "learnings.md",
            "- 2024-03-15: fixed the race condition\n- undated note\n- 2024-13-45 nonsense date\n",
        );

        let sources = loader().load(dir.path()).unwrap();
        let entries = &sources[0].entries;
        assert_eq!(
            entries[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert!(entries[0].text.contains("fixed the race"));
        assert!(entries[1].date.is_none());
        assert!(entries[2].date.is_none());
    }

    #[test]
    fn test_hidden_paths_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "learnings.md", "- visible");
        write(&dir, ".hindsight/learnings.md", "- state dir");
        write(&dir, ".drafts/decisions.md", "- hidden");

        let sources = loader().load(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].path, "learnings.md");
    }

    #[test]
    fn test_unknown_extension_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "learnings.json", "{}");
        write(&dir, "learnings.md", "- kept");

        let sources = loader().load(dir.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].path, "learnings.md");
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let sources = loader().load(dir.path()).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(loader().load(&missing).is_err());
    }

    #[test]
    fn test_deterministic_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b-learnings.md", "- b");
        write(&dir, "a-learnings.md", "- a");
        write(&dir, "c-decisions.md", "- c");

        let paths: Vec<String> = loader()
            .load(dir.path())
            .unwrap()
            .into_iter()
            .map(|s| s.path)
            .collect();
        assert_eq!(paths, vec!["a-learnings.md", "b-learnings.md", "c-decisions.md"]);
    }
}
