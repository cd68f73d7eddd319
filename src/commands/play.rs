//! Interactive play command
//!
//! The user thinks of a phrase and answers the solver's questions on the
//! terminal.

use crate::core::EngineError;
use crate::oracle::TerminalOracle;
use crate::solver::{Outcome, Solver};
use crate::trace::TraceSink;
use std::io::{BufRead, Write};

/// Play one game on stdin/stdout
///
/// # Errors
///
/// Returns `EngineError` if input ends early, the answers contradict each
/// other, or the phrase uses a word outside the corpus.
pub fn run_play<T: TraceSink + ?Sized>(
    solver: &Solver,
    length: Option<usize>,
    trace: &mut T,
) -> Result<Outcome, EngineError> {
    play_session(solver, TerminalOracle::stdio(), length, trace)
}

/// Play one game against any line-based reader and writer
///
/// Asks for the phrase length first when it is not given.
///
/// # Errors
///
/// See [`run_play`].
pub fn play_session<R, W, T>(
    solver: &Solver,
    mut oracle: TerminalOracle<R, W>,
    length: Option<usize>,
    trace: &mut T,
) -> Result<Outcome, EngineError>
where
    R: BufRead,
    W: Write,
    T: TraceSink + ?Sized,
{
    let length = match length {
        Some(len) => len,
        None => oracle.ask_phrase_length()?,
    };
    let mut oracle = oracle.with_phrase_len(length);

    solver.solve(length, &mut oracle, trace)
}
