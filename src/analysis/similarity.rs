//! Jaccard similarity between keyword sets

use std::collections::BTreeSet;

/// Jaccard overlap between two keyword sets: `|A∩B| / |A∪B|`.
///
/// Returns 0.0 when either set is empty; "nothing vs. something" is
/// never similar. Result is in [0,1] and equals 1.0 only for identical
/// non-empty sets.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}
