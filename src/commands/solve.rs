//! Phrase solving command
//!
//! Plays a full game against a known phrase and keeps every round.

use crate::core::EngineError;
use crate::oracle::KnownPhraseOracle;
use crate::solver::{Outcome, Round, Solver};
use crate::trace::TraceSink;
use std::io;

/// Result of solving a phrase
pub struct SolveResult {
    pub target: String,
    pub outcome: Outcome,
    pub rounds: Vec<Round>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome.phrase == self.target
    }
}

/// Keeps each round and forwards everything to another sink
struct RoundLog<'a, T: TraceSink + ?Sized> {
    rounds: Vec<Round>,
    inner: &'a mut T,
}

impl<T: TraceSink + ?Sized> TraceSink for RoundLog<'_, T> {
    fn round(&mut self, round: &Round) -> io::Result<()> {
        self.rounds.push(round.clone());
        self.inner.round(round)
    }

    fn finish(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.inner.finish(outcome)
    }
}

/// Solve a specific phrase with a truthful oracle
///
/// # Errors
///
/// Returns `EngineError` if the solver gives up, typically because a word of
/// the phrase is missing from the corpus.
pub fn solve_phrase<T: TraceSink + ?Sized>(
    solver: &Solver,
    phrase: &str,
    trace: &mut T,
) -> Result<SolveResult, EngineError> {
    let mut oracle = KnownPhraseOracle::new(phrase);
    let mut log = RoundLog {
        rounds: Vec::new(),
        inner: trace,
    };

    let outcome = solver.solve(oracle.len(), &mut oracle, &mut log)?;

    Ok(SolveResult {
        target: oracle.secret().to_string(),
        outcome,
        rounds: log.rounds,
    })
}
