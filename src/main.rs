//! Hindsight - Consistency Linter and Insight Miner for Agent Memory
//!
//! Scans a directory of free-text memory files, lints them for
//! contradictions, duplicates and gaps, and mines insights whose
//! confidence evolves across runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hindsight::analysis::AnalysisContext;
use hindsight::config::{HindsightConfig, ReportFormat};
use hindsight::corpus::CorpusLoader;
use hindsight::insight::{InsightMemory, Miner};
use hindsight::lint::Linter;
use hindsight::report;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hindsight")]
#[command(author = "A3S Lab Team")]
#[command(version)]
#[command(about = "Consistency linter and insight miner for agent memory directories")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HINDSIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a memory directory for consistency problems
    Lint {
        /// Memory directory to scan
        dir: PathBuf,

        /// Output format (md or json)
        #[arg(long)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Mine insights and update the cross-run insight state
    Insights {
        /// Memory directory to scan
        dir: PathBuf,

        /// Insight state file (defaults to <dir>/.hindsight/insights.json)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Output format (md or json)
        #[arg(long)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip persisting the updated insight state
        #[arg(long)]
        no_save: bool,
    },

    /// Run both passes and render one combined report
    Report {
        /// Memory directory to scan
        dir: PathBuf,

        /// Insight state file (defaults to <dir>/.hindsight/insights.json)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Output format (md or json)
        #[arg(long)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip persisting the updated insight state
        #[arg(long)]
        no_save: bool,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("hindsight={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Lint {
            dir,
            format,
            output,
        } => run_lint(config, &dir, format, output.as_deref()),
        Commands::Insights {
            dir,
            state,
            format,
            output,
            no_save,
        } => run_insights(config, &dir, state, format, output.as_deref(), no_save),
        Commands::Report {
            dir,
            state,
            format,
            output,
            no_save,
        } => run_report(config, &dir, state, format, output.as_deref(), no_save),
        Commands::Config { default } => show_config(if default { None } else { Some(&config) }),
    }
}

/// Load configuration from the given path, the user config directory,
/// or fall back to the defaults.
fn load_config(path: Option<&Path>) -> Result<HindsightConfig> {
    if let Some(path) = path {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(path) = dirs_next::config_dir().map(|p| p.join("hindsight").join("config.toml")) {
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(HindsightConfig::default())
}

fn run_lint(
    mut config: HindsightConfig,
    dir: &Path,
    format: Option<ReportFormat>,
    output: Option<&Path>,
) -> Result<()> {
    if let Some(format) = format {
        config.report.format = format;
    }

    let sources = CorpusLoader::new(config.scan.clone()).load(dir)?;
    let today = chrono::Local::now().date_naive();
    let ctx = AnalysisContext::new(&sources, today);

    let report = Linter::new(config.lint.clone()).run(&ctx);
    let rendered = report::render_lint(&report, &config.report)?;
    emit(&rendered, output)?;

    // Non-zero exit so CI can gate on error-severity findings
    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_insights(
    mut config: HindsightConfig,
    dir: &Path,
    state: Option<PathBuf>,
    format: Option<ReportFormat>,
    output: Option<&Path>,
    no_save: bool,
) -> Result<()> {
    if let Some(format) = format {
        config.report.format = format;
    }
    let state_path = state_path(dir, state, &config);

    let sources = CorpusLoader::new(config.scan.clone()).load(dir)?;
    let today = chrono::Local::now().date_naive();
    let ctx = AnalysisContext::new(&sources, today);

    let memory = InsightMemory::load(&state_path);
    let outcome = Miner::new(config.insight.clone()).run(&ctx, memory);

    let rendered = report::render_insights(&outcome, &config.report)?;
    emit(&rendered, output)?;

    if !no_save {
        outcome.memory.save(&state_path)?;
    }
    Ok(())
}

fn run_report(
    mut config: HindsightConfig,
    dir: &Path,
    state: Option<PathBuf>,
    format: Option<ReportFormat>,
    output: Option<&Path>,
    no_save: bool,
) -> Result<()> {
    if let Some(format) = format {
        config.report.format = format;
    }
    let state_path = state_path(dir, state, &config);

    let sources = CorpusLoader::new(config.scan.clone()).load(dir)?;
    let today = chrono::Local::now().date_naive();
    let ctx = AnalysisContext::new(&sources, today);

    let report = Linter::new(config.lint.clone()).run(&ctx);
    let memory = InsightMemory::load(&state_path);
    let outcome = Miner::new(config.insight.clone()).run(&ctx, memory);

    let rendered = report::render_combined(&report, &outcome, &config.report)?;
    emit(&rendered, output)?;

    if !no_save {
        outcome.memory.save(&state_path)?;
    }
    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

/// Resolve the insight state file: flag, then config, then the default
/// location inside the scanned directory.
fn state_path(dir: &Path, state: Option<PathBuf>, config: &HindsightConfig) -> PathBuf {
    state
        .or_else(|| config.insight.state_file.clone())
        .unwrap_or_else(|| dir.join(".hindsight").join("insights.json"))
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn show_config(config: Option<&HindsightConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
