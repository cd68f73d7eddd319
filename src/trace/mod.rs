//! Round-by-round trace output
//!
//! Purely observational: the solver reports every round and the final
//! outcome to a `TraceSink`, which may write them somewhere or drop them.

mod file;

pub use file::FileTrace;

use crate::solver::{Outcome, Round};
use std::io;

/// Receiver of per-round diagnostics
pub trait TraceSink {
    /// Record a round snapshot
    ///
    /// # Errors
    /// Returns the underlying I/O error if the record cannot be written.
    fn round(&mut self, round: &Round) -> io::Result<()>;

    /// Record the final outcome
    ///
    /// # Errors
    /// Returns the underlying I/O error if the record cannot be written.
    fn finish(&mut self, outcome: &Outcome) -> io::Result<()>;
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn round(&mut self, _round: &Round) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, _outcome: &Outcome) -> io::Result<()> {
        Ok(())
    }
}
