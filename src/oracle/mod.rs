//! Response providers
//!
//! The solver asks questions through the `ResponseProvider` trait. Bindings:
//! a terminal that re-prompts on malformed replies, a scripted replay for
//! tests, and a truthful oracle that knows the secret phrase.

mod known;
pub mod reply;
mod scripted;
mod terminal;

pub use known::KnownPhraseOracle;
pub use reply::{
    ReplyError, parse_length, parse_letter_reply, parse_phrase_reply, reject_spaces,
};
pub use scripted::{ScriptedOracle, ScriptedReply};
pub use terminal::TerminalOracle;

use crate::core::{GuessResponse, Query};
use crate::solver::{Outcome, Round};
use std::fmt;
use std::io;

/// Source of answers to the solver's questions
pub trait ResponseProvider {
    /// Where, if anywhere, does `letter` occur?
    ///
    /// # Errors
    /// Returns `OracleError` if no answer can be obtained.
    fn letter(&mut self, letter: char, guess_number: usize) -> Result<GuessResponse, OracleError>;

    /// Is the phrase exactly `phrase`?
    ///
    /// # Errors
    /// Returns `OracleError` if no answer can be obtained.
    fn phrase(&mut self, phrase: &str, guess_number: usize) -> Result<bool, OracleError>;

    /// Called with each round's snapshot before its guess is made
    ///
    /// # Errors
    /// Returns `OracleError` if the provider fails to display the round.
    fn observe(&mut self, _round: &Round) -> Result<(), OracleError> {
        Ok(())
    }

    /// Called once the phrase is resolved
    ///
    /// # Errors
    /// Returns `OracleError` if the provider fails to display the outcome.
    fn conclude(&mut self, _outcome: &Outcome) -> Result<(), OracleError> {
        Ok(())
    }
}

/// Failure to obtain an answer
#[derive(Debug)]
pub enum OracleError {
    Io(io::Error),
    /// Input ended before a valid reply
    Closed,
    /// The user abandoned the session
    Cancelled,
    /// A scripted oracle ran out of replies
    ScriptExhausted,
    /// A scripted reply did not fit the question asked
    UnexpectedQuery(Query),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Closed => write!(f, "input closed before a valid reply"),
            Self::Cancelled => write!(f, "session cancelled"),
            Self::ScriptExhausted => write!(f, "no scripted replies left"),
            Self::UnexpectedQuery(query) => {
                write!(f, "scripted reply does not answer guess {query}")
            }
        }
    }
}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for OracleError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
