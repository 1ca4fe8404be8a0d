//! Hindsight - Consistency Linter and Insight Miner for Agent Memory
//!
//! Hindsight scans a directory of free-text memory files (learning
//! notes, decision logs, failure records, session traces) with purely
//! lexical heuristics: it lints the corpus for consistency problems and
//! mines emergent insights whose confidence evolves across runs through
//! a persisted signature-keyed memory.
//!
//! ## Architecture
//!
//! ```text
//!  memory directory
//!         │
//!         ▼
//!  ┌──────────────┐      ┌─────────────────────────────────┐
//!  │ CorpusLoader │─────▶│         AnalysisContext         │
//!  └──────────────┘      │  keywords / polarity / weights  │
//!                        └────────┬───────────────┬────────┘
//!                                 │               │
//!                      ┌──────────▼───┐    ┌──────▼────────┐
//!                      │    Linter    │    │     Miner     │◀── InsightMemory
//!                      │   5 checks   │    │  4 detectors  │──▶ (persisted)
//!                      └──────────┬───┘    └──────┬────────┘
//!                                 │               │
//!                            LintReport     MiningOutcome
//!                                 └───────┬───────┘
//!                                         ▼
//!                              report (markdown / json)
//! ```
//!
//! ## Modules
//!
//! - [`corpus`]: memory files on disk, loaded into `Source` records
//! - [`analysis`]: the keyword, similarity, polarity and recency leaves
//! - [`lint`]: the five consistency checks and the lint report
//! - [`insight`]: the four detectors, cross-run memory and the miner
//! - [`report`]: markdown and JSON rendering
//! - [`config`]: tunable thresholds and scan settings

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod insight;
pub mod lint;
pub mod report;

pub use config::HindsightConfig;
pub use error::{Error, Result};
