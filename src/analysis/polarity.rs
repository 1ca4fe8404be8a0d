//! Lexical polarity detection
//!
//! Scans raw text against two independent cue lists: affirmative or
//! obligation cues ("must", "always", ...) and prohibition cues
//! ("avoid", "never", "danger", ...). The two flags are independent; a
//! text may carry both, either, or neither, and absence of cues is not
//! a signal. Multiword negations ("must not") set both flags and are
//! therefore excluded from contradiction pairing by the caller.

use once_cell::sync::Lazy;
use regex::Regex;

static AFFIRMATIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(must|always|shall|ensures?|require[sd]?|mandatory|essential|recommend(?:s|ed)?|prefer(?:s|red)?|adopt(?:s|ed)?|enforce[sd]?|keeps?|enable[sd]?)\b",
    )
    .unwrap()
});

static PROHIBITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(never|avoid(?:s|ed)?|don'?t|forbidden|prohibited|deprecated|danger(?:ous)?|unsafe|disable[sd]?|reject(?:s|ed)?|ban(?:ned)?|stops?)\b",
    )
    .unwrap()
});

/// The stance a piece of text carries, as two independent cue flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Polarity {
    /// Text contains an affirmative/obligation cue
    pub affirmative: bool,
    /// Text contains a prohibition cue
    pub prohibitive: bool,
}

impl Polarity {
    /// Whether two polarities disagree: one side affirmative-only, the
    /// other prohibition-only. Mixed or neutral texts never oppose.
    pub fn opposes(&self, other: &Polarity) -> bool {
        let self_affirms = self.affirmative && !self.prohibitive;
        let self_prohibits = self.prohibitive && !self.affirmative;
        let other_affirms = other.affirmative && !other.prohibitive;
        let other_prohibits = other.prohibitive && !other.affirmative;

        (self_affirms && other_prohibits) || (self_prohibits && other_affirms)
    }
}

/// Detect the polarity of a piece of text.
pub fn detect_polarity(text: &str) -> Polarity {
    Polarity {
        affirmative: AFFIRMATIVE_RE.is_match(text),
        prohibitive: PROHIBITION_RE.is_match(text),
    }
}
