//! Word-frequency corpora
//!
//! Provides the embedded default corpus and a loader for corpus files.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_CORPUS, DEFAULT_CORPUS_COUNT};
pub use loader::{CorpusError, entries_from_slice, load_corpus, parse_corpus};

use crate::core::WordEntry;

/// The embedded corpus as weighted entries
#[must_use]
pub fn default_corpus() -> Vec<WordEntry> {
    entries_from_slice(DEFAULT_CORPUS)
}
