//! Memory corpus model and loading
//!
//! - [`entry`]: a single dated or undated record
//! - [`source`]: a source file with its kind and ordered entries
//! - [`loader`]: directory scanning and markdown entry splitting

pub mod entry;
pub mod loader;
pub mod source;

pub use entry::MemoryEntry;
pub use loader::CorpusLoader;
pub use source::{Source, SourceKind};
