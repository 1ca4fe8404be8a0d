//! Keyword extraction from free-text memory entries
//!
//! Splits on non-alphanumeric boundaries (Unicode-aware), lower-cases,
//! then drops tokens shorter than 3 characters, stopwords, and purely
//! numeric tokens. The stopword list covers common English, French,
//! Spanish and German function words plus the polarity cue vocabulary:
//! cue words carry stance, not topic, so they never participate in
//! topic overlap.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};

/// Minimum keyword length in characters
pub const MIN_KEYWORD_LEN: usize = 3;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    STOPWORD_LIST.iter().copied().collect()
});

#[rustfmt::skip]
const STOPWORD_LIST: &[&str] = &[
    // English
    "about", "above", "after", "again", "against", "all", "also", "and",
    "any", "are", "because", "been", "before", "being", "below", "between",
    "both", "but", "can", "cannot", "could", "did", "does", "doing", "down",
    "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "her", "here", "hers", "him", "his", "how", "into", "its",
    "itself", "just", "may", "might", "more", "most", "nor", "not", "now",
    "off", "once", "only", "other", "ought", "our", "ours", "out", "over",
    "own", "same", "she", "should", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "then", "there", "these", "they", "this",
    "those", "through", "too", "under", "until", "very", "was", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your", "yours",
    // French
    "ainsi", "alors", "après", "aucun", "aussi", "autre", "avant", "avec",
    "avoir", "ces", "cette", "chez", "comme", "dans", "des", "déjà", "donc",
    "elle", "elles", "encore", "entre", "est", "était", "être", "faire",
    "fait", "ils", "les", "leur", "leurs", "mais", "même", "nous", "par",
    "pas", "peut", "plus", "pour", "qui", "que", "sans", "ses", "son",
    "sont", "sous", "sur", "tous", "tout", "toutes", "une", "vous",
    // Spanish
    "aunque", "cada", "como", "con", "cuando", "del", "desde", "donde",
    "ellas", "ellos", "esta", "estar", "estas", "este", "esto", "estos",
    "hasta", "hay", "las", "los", "más", "muy", "nos", "otra", "otras",
    "otro", "otros", "para", "pero", "por", "porque", "sin", "sobre", "sus",
    "también", "toda", "todas", "todo", "todos", "una", "uno", "unos",
    // German
    "aber", "als", "auch", "auf", "aus", "bei", "beim", "damit", "dann",
    "das", "dass", "dem", "den", "der", "dessen", "die", "diese", "dieser",
    "dieses", "durch", "ein", "eine", "einem", "einen", "einer", "eines",
    "für", "haben", "hat", "ihre", "ist", "kann", "können", "mit", "muss",
    "müssen", "nach", "nicht", "noch", "nur", "oder", "schon", "sehr",
    "sich", "sie", "sind", "sollte", "sollten", "und", "unter", "vom",
    "von", "war", "waren", "wenn", "werden", "wie", "wir", "wird", "zum",
    "zur", "über",
    // Polarity cue vocabulary (stance, not topic)
    "adopt", "adopted", "adopts", "always", "avoid", "avoided", "avoids",
    "ban", "banned", "danger", "dangerous", "deprecated", "disable",
    "disabled", "disables", "don", "dont", "enable", "enabled", "enables",
    "enforce", "enforced", "enforces", "ensure", "ensures", "essential",
    "forbidden", "keep", "keeps", "mandatory", "must", "never", "prefer",
    "preferred", "prefers", "prohibited", "recommend", "recommended",
    "recommends", "reject", "rejected", "rejects", "require", "required",
    "requires", "shall", "stop", "stops", "unsafe",
];

/// Extract the normalized keyword set from a piece of text.
///
/// Returns a sorted set, so downstream iteration is deterministic.
/// Empty or stopword-only input yields an empty set.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|token| !STOPWORDS.contains(token.as_str()))
        .filter(|token| !token.chars().all(|c| c.is_numeric()))
        .collect()
}

/// Whether a normalized token is on the stopword list.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
