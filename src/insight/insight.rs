//! Insight data types
//!
//! An insight is one emergent observation over the corpus: a practice
//! that keeps recurring, an unresolved tension, a topic that bridges
//! source kinds, or a much-discussed topic nobody decided on. Insights
//! are matched across runs by their signature, so the same finding
//! phrased differently on the next run still lands on one confidence
//! track.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The kind of emergent observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    /// The same practice recorded independently several times
    RecurringPattern,
    /// Opposed stances too weakly linked to be a lint error
    Tension,
    /// One topic surfacing in two different kinds of sources
    CrossConnection,
    /// A much-mentioned topic with no recorded decision
    Opportunity,
}

impl InsightCategory {
    /// Kebab-case slug, also the signature prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::RecurringPattern => "recurring-pattern",
            InsightCategory::Tension => "tension",
            InsightCategory::CrossConnection => "cross-connection",
            InsightCategory::Opportunity => "opportunity",
        }
    }
}

/// One emergent observation over the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Short summary line
    pub title: String,
    /// Full description
    pub description: String,
    /// Observation category
    pub category: InsightCategory,
    /// Evidence references in `path#index` form, sorted
    pub sources: BTreeSet<String>,
    /// Certainty in [0, 1]. Detectors emit raw evidence strength here;
    /// after mining it holds the remembered cross-run confidence.
    pub confidence: f64,
    /// Cross-run identity (see [`Insight::signature_of`])
    pub signature: String,
    /// Most recent evidence date, for recency-aware ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_evidence: Option<NaiveDate>,
}

impl Insight {
    /// Build the cross-run identity for an insight: the category slug
    /// plus up to six of its defining keywords, sorted.
    ///
    /// Keywords are already lower-cased, so paraphrased recurrences of
    /// the same observation collapse to one signature. An empty keyword
    /// set still yields a non-empty, category-prefixed signature.
    pub fn signature_of(category: InsightCategory, keywords: &BTreeSet<String>) -> String {
        let keys: Vec<&str> = keywords.iter().take(6).map(String::as_str).collect();
        format!("{}:{}", category.as_str(), keys.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_category_slugs() {
        assert_eq!(InsightCategory::RecurringPattern.as_str(), "recurring-pattern");
        assert_eq!(InsightCategory::Tension.as_str(), "tension");
        assert_eq!(InsightCategory::CrossConnection.as_str(), "cross-connection");
        assert_eq!(InsightCategory::Opportunity.as_str(), "opportunity");
    }

    #[test]
    fn test_category_serialization_round_trip() {
        for category in [
            InsightCategory::RecurringPattern,
            InsightCategory::Tension,
            InsightCategory::CrossConnection,
            InsightCategory::Opportunity,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            let back: InsightCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_signature_is_sorted_and_prefixed() {
        let signature =
            Insight::signature_of(InsightCategory::Tension, &keywords(&["stale", "caching"]));
        assert_eq!(signature, "tension:caching+stale");
    }

    #[test]
    fn test_signature_caps_at_six_keywords() {
        let signature = Insight::signature_of(
            InsightCategory::RecurringPattern,
            &keywords(&["a1", "b2", "c3", "d4", "e5", "f6", "g7", "h8"]),
        );
        assert_eq!(signature, "recurring-pattern:a1+b2+c3+d4+e5+f6");
    }

    #[test]
    fn test_signature_never_empty() {
        let signature = Insight::signature_of(InsightCategory::Opportunity, &BTreeSet::new());
        assert_eq!(signature, "opportunity:");
        assert!(signature.starts_with("opportunity"));
    }

    #[test]
    fn test_signature_stable_across_paraphrase() {
        // Different insertion order, same set, same signature
        let a = Insight::signature_of(
            InsightCategory::CrossConnection,
            &keywords(&["redis", "caching"]),
        );
        let b = Insight::signature_of(
            InsightCategory::CrossConnection,
            &keywords(&["caching", "redis"]),
        );
        assert_eq!(a, b);
    }
}
