//! Truthful oracle that knows the secret phrase

use super::{OracleError, ResponseProvider};
use crate::core::{GuessResponse, Positions, Query};

/// Answers every question from a known phrase
///
/// Used for self-play (`solve`, `benchmark`) and tests.
#[derive(Debug, Clone)]
pub struct KnownPhraseOracle {
    secret: String,
    chars: Vec<char>,
    asked: Vec<Query>,
}

impl KnownPhraseOracle {
    /// Create an oracle for a phrase (uppercased)
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::GuessResponse;
    /// use hangman_entropy::oracle::{KnownPhraseOracle, ResponseProvider};
    ///
    /// let mut oracle = KnownPhraseOracle::new("hello world");
    /// assert_eq!(oracle.len(), 11);
    /// assert_eq!(
    ///     oracle.letter('L', 2).unwrap(),
    ///     GuessResponse::positive(vec![3, 4, 10]).unwrap()
    /// );
    /// assert!(oracle.phrase("HELLO WORLD", 3).unwrap());
    /// ```
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let secret = secret.to_uppercase();
        let chars = secret.chars().collect();
        Self {
            secret,
            chars,
            asked: Vec::new(),
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Phrase length in characters, spaces included
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn asked(&self) -> &[Query] {
        &self.asked
    }
}

impl ResponseProvider for KnownPhraseOracle {
    fn letter(&mut self, letter: char, _guess_number: usize) -> Result<GuessResponse, OracleError> {
        self.asked.push(Query::Letter(letter));

        let positions: Vec<usize> = self
            .chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == letter)
            .map(|(i, _)| i + 1)
            .collect();

        Ok(Positions::new(positions).map_or(GuessResponse::Negative, GuessResponse::Positive))
    }

    fn phrase(&mut self, phrase: &str, _guess_number: usize) -> Result<bool, OracleError> {
        self.asked.push(Query::Phrase(phrase.to_string()));
        Ok(phrase == self.secret)
    }
}
