//! Report rendering
//!
//! Turns a `LintReport` or `MiningOutcome` into a markdown or pretty
//! JSON string. Rendering is pure; writing the result anywhere is the
//! caller's business.

mod json;
mod markdown;

use crate::config::{ReportConfig, ReportFormat};
use crate::error::Result;
use crate::insight::MiningOutcome;
use crate::lint::LintReport;

/// Render a lint report in the configured format.
pub fn render_lint(report: &LintReport, config: &ReportConfig) -> Result<String> {
    match config.format {
        ReportFormat::Markdown => Ok(markdown::lint_markdown(report, config.show_suggestions)),
        ReportFormat::Json => json::lint_json(report),
    }
}

/// Render a mining outcome in the configured format.
pub fn render_insights(outcome: &MiningOutcome, config: &ReportConfig) -> Result<String> {
    match config.format {
        ReportFormat::Markdown => Ok(markdown::insights_markdown(outcome)),
        ReportFormat::Json => json::insights_json(outcome),
    }
}

/// Render both passes as one document.
pub fn render_combined(
    report: &LintReport,
    outcome: &MiningOutcome,
    config: &ReportConfig,
) -> Result<String> {
    match config.format {
        ReportFormat::Markdown => Ok(format!(
            "{}\n{}",
            markdown::lint_markdown(report, config.show_suggestions),
            markdown::insights_markdown(outcome)
        )),
        ReportFormat::Json => json::combined_json(report, outcome),
    }
}
