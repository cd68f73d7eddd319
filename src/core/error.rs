//! Engine error type

use crate::oracle::OracleError;
use std::fmt;
use std::io;

/// Fatal conditions that abort a solving session
#[derive(Debug)]
pub enum EngineError {
    /// Entropy requested for a distribution with no entries
    EmptyDistribution,
    /// A slot has no candidate with positive weight left
    ExhaustedCandidates { slot: usize },
    /// The space response does not describe a valid phrase layout
    InvalidLayout(String),
    /// A reported position is outside the phrase or on a space
    InvalidPosition { position: usize, phrase_len: usize },
    /// Every letter has been guessed but the phrase is unresolved
    AlphabetExhausted,
    Oracle(OracleError),
    Trace(io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDistribution => write!(f, "entropy of an empty distribution is undefined"),
            Self::ExhaustedCandidates { slot } => write!(
                f,
                "no candidates remain for word {} (word not in corpus or inconsistent responses)",
                slot + 1
            ),
            Self::InvalidLayout(reason) => write!(f, "invalid phrase layout: {reason}"),
            Self::InvalidPosition {
                position,
                phrase_len,
            } => write!(
                f,
                "position {position} is not a letter position in a phrase of length {phrase_len}"
            ),
            Self::AlphabetExhausted => write!(f, "every letter has been guessed"),
            Self::Oracle(e) => write!(f, "oracle failed: {e}"),
            Self::Trace(e) => write!(f, "trace write failed: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Oracle(e) => Some(e),
            Self::Trace(e) => Some(e),
            _ => None,
        }
    }
}

impl From<OracleError> for EngineError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}
