//! Lexical analysis leaves shared by the linter and the miner
//!
//! All pure and deterministic: keyword extraction, Jaccard similarity,
//! cue-based polarity, and age-based evidence weighting. No embeddings,
//! no model calls.

pub mod context;
pub mod keywords;
pub mod polarity;
pub mod similarity;
pub mod temporal;

pub use context::{AnalysisContext, IndexedEntry};
pub use keywords::extract_keywords;
pub use polarity::{detect_polarity, Polarity};
pub use similarity::jaccard;
pub use temporal::temporal_weight;
