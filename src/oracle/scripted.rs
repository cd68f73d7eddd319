//! Scripted oracle for deterministic replays

use super::{OracleError, ResponseProvider};
use crate::core::{GuessResponse, Query};
use std::collections::VecDeque;

/// One prepared answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    Letter(GuessResponse),
    Phrase(bool),
}

/// Answers questions from a fixed script, in order, whatever is asked
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    replies: VecDeque<ScriptedReply>,
    asked: Vec<Query>,
}

impl ScriptedOracle {
    #[must_use]
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: replies.into(),
            asked: Vec::new(),
        }
    }

    /// Every question received so far
    #[must_use]
    pub fn asked(&self) -> &[Query] {
        &self.asked
    }

    /// True when every scripted reply has been used
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.replies.is_empty()
    }

    fn next(&mut self, query: Query) -> Result<ScriptedReply, OracleError> {
        self.asked.push(query);
        self.replies.pop_front().ok_or(OracleError::ScriptExhausted)
    }
}

impl ResponseProvider for ScriptedOracle {
    fn letter(&mut self, letter: char, _guess_number: usize) -> Result<GuessResponse, OracleError> {
        match self.next(Query::Letter(letter))? {
            ScriptedReply::Letter(response) => Ok(response),
            ScriptedReply::Phrase(_) => Err(OracleError::UnexpectedQuery(Query::Letter(letter))),
        }
    }

    fn phrase(&mut self, phrase: &str, _guess_number: usize) -> Result<bool, OracleError> {
        match self.next(Query::Phrase(phrase.to_string()))? {
            ScriptedReply::Phrase(confirmed) => Ok(confirmed),
            ScriptedReply::Letter(_) => {
                Err(OracleError::UnexpectedQuery(Query::Phrase(phrase.to_string())))
            }
        }
    }
}
