//! Hindsight configuration management
//!
//! All analysis thresholds are empirically chosen constants preserved
//! here as named, documented, tunable fields. The defaults were tuned
//! against the keyword extractor in [`crate::analysis::keywords`]:
//! polarity cue words are stopwords, so cue vocabulary never inflates
//! topic similarity.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Hindsight configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HindsightConfig {
    /// Corpus scanning configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Consistency linter thresholds
    #[serde(default)]
    pub lint: LintConfig,

    /// Insight miner thresholds
    #[serde(default)]
    pub insight: InsightConfig,

    /// Report rendering configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Corpus scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions treated as memory records
    pub extensions: Vec<String>,

    /// Include hidden files and directories
    pub include_hidden: bool,

    /// Maximum directory depth (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                "md".to_string(),
                "markdown".to_string(),
                "txt".to_string(),
            ],
            include_hidden: false,
            max_depth: None,
        }
    }
}

/// Consistency linter thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Minimum keyword similarity for a polarity-opposed pair to count
    /// as a contradiction
    pub contradiction_min_similarity: f64,

    /// Minimum keyword similarity for a cross-file pair to count as a
    /// duplicate
    pub duplicate_min_similarity: f64,

    /// Minimum keyword similarity linking a trace decision to the
    /// decision log, and a failure to a learning
    pub link_min_similarity: f64,

    /// Minimum number of dated entries before chronology is checked
    pub chronology_min_dated: usize,

    /// Maximum characters per evidence excerpt
    pub max_excerpt_chars: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            contradiction_min_similarity: 0.15,
            duplicate_min_similarity: 0.75,
            link_min_similarity: 0.25,
            chronology_min_dated: 4,
            max_excerpt_chars: 120,
        }
    }
}

/// Insight miner thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Minimum pairwise similarity within a recurring-pattern cluster
    pub pattern_min_similarity: f64,

    /// Minimum similarity for a polarity-opposed pair to count as a
    /// tension (softer than the lint contradiction threshold)
    pub tension_min_similarity: f64,

    /// Minimum similarity for a pair from different source kinds to
    /// count as a cross-connection
    pub cross_connection_min_similarity: f64,

    /// Minimum distinct entries mentioning a topic before it can be an
    /// opportunity
    pub opportunity_min_mentions: usize,

    /// Maximum insights reported per run (ranking cutoff)
    pub max_insights: usize,

    /// Insight memory state file (None = `.hindsight/insights.json`
    /// under the scanned directory)
    pub state_file: Option<PathBuf>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            pattern_min_similarity: 0.30,
            tension_min_similarity: 0.08,
            cross_connection_min_similarity: 0.35,
            opportunity_min_mentions: 3,
            max_insights: 50,
            state_file: None,
        }
    }
}

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable markdown
    #[default]
    Markdown,
    /// Machine-readable pretty JSON
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown report format: {}", s)),
        }
    }
}

/// Report rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format
    pub format: ReportFormat,

    /// Include fix suggestions in lint output
    pub show_suggestions: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Markdown,
            show_suggestions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HindsightConfig::default();
        assert!((config.lint.contradiction_min_similarity - 0.15).abs() < f64::EPSILON);
        assert!((config.lint.duplicate_min_similarity - 0.75).abs() < f64::EPSILON);
        assert!(config.insight.tension_min_similarity < config.lint.contradiction_min_similarity);
        assert_eq!(config.lint.chronology_min_dated, 4);
        assert_eq!(config.insight.opportunity_min_mentions, 3);
        assert_eq!(config.report.format, ReportFormat::Markdown);
        assert!(config.insight.state_file.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: HindsightConfig = toml::from_str(
            r#"
            [lint]
            contradiction_min_similarity = 0.2
            duplicate_min_similarity = 0.8
            link_min_similarity = 0.3
            chronology_min_dated = 5
            max_excerpt_chars = 80
            "#,
        )
        .unwrap();

        assert!((config.lint.contradiction_min_similarity - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.lint.chronology_min_dated, 5);
        // Untouched sections keep their defaults
        assert!((config.insight.pattern_min_similarity - 0.30).abs() < f64::EPSILON);
        assert_eq!(config.scan.extensions.len(), 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = HindsightConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: HindsightConfig = toml::from_str(&rendered).unwrap();
        assert!(
            (parsed.insight.cross_connection_min_similarity
                - config.insight.cross_connection_min_similarity)
                .abs()
                < f64::EPSILON
        );
        assert_eq!(parsed.report.format, config.report.format);
    }

    #[test]
    fn test_report_format_serialization() {
        let json = serde_json::to_string(&ReportFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let md: ReportFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(md, ReportFormat::Markdown);
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("markdown".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
