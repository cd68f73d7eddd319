//! Oracle responses and guess queries
//!
//! A letter guess is answered either `Negative` or `Positive` with the
//! 1-based absolute positions (spaces included) where the letter occurs.

use std::fmt;

/// Validated position list: non-empty, 1-based, sorted, no duplicates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Positions(Vec<usize>);

/// Error type for invalid position lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionsError {
    Empty,
    ZeroPosition,
}

impl fmt::Display for PositionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "a positive response needs at least one position"),
            Self::ZeroPosition => write!(f, "positions are 1-based"),
        }
    }
}

impl std::error::Error for PositionsError {}

impl Positions {
    /// Build a position list, sorting and removing duplicates
    ///
    /// # Errors
    /// Returns `PositionsError` if the list is empty or contains 0.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::Positions;
    ///
    /// let positions = Positions::new(vec![4, 3, 4]).unwrap();
    /// assert_eq!(positions.as_slice(), &[3, 4]);
    /// assert!(Positions::new(vec![]).is_err());
    /// ```
    pub fn new(mut positions: Vec<usize>) -> Result<Self, PositionsError> {
        if positions.is_empty() {
            return Err(PositionsError::Empty);
        }
        if positions.contains(&0) {
            return Err(PositionsError::ZeroPosition);
        }
        positions.sort_unstable();
        positions.dedup();
        Ok(Self(positions))
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }
}

/// Response to a letter guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResponse {
    Negative,
    Positive(Positions),
}

impl GuessResponse {
    /// Convenience constructor for a positive response
    ///
    /// # Errors
    /// Returns `PositionsError` if the positions are invalid.
    pub fn positive(positions: Vec<usize>) -> Result<Self, PositionsError> {
        Positions::new(positions).map(Self::Positive)
    }

    #[must_use]
    pub const fn is_positive(&self) -> bool {
        matches!(self, Self::Positive(_))
    }
}

impl fmt::Display for GuessResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "N"),
            Self::Positive(positions) => {
                write!(f, "Y")?;
                for p in positions.as_slice() {
                    write!(f, ", {p}")?;
                }
                Ok(())
            }
        }
    }
}

/// A question put to the oracle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    Letter(char),
    Phrase(String),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(' ') => write!(f, "space"),
            Self::Letter(c) => write!(f, "{c}"),
            Self::Phrase(p) => write!(f, "{p}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_sorted_and_deduped() {
        let p = Positions::new(vec![9, 2, 2, 5]).unwrap();
        assert_eq!(p.as_slice(), &[2, 5, 9]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.max(), 9);
    }

    #[test]
    fn positions_reject_empty_and_zero() {
        assert_eq!(Positions::new(vec![]), Err(PositionsError::Empty));
        assert_eq!(
            Positions::new(vec![0, 1]),
            Err(PositionsError::ZeroPosition)
        );
    }

    #[test]
    fn response_display_matches_reply_grammar() {
        assert_eq!(GuessResponse::Negative.to_string(), "N");
        let r = GuessResponse::positive(vec![4, 3]).unwrap();
        assert_eq!(r.to_string(), "Y, 3, 4");
        assert!(r.is_positive());
    }

    #[test]
    fn query_display() {
        assert_eq!(Query::Letter(' ').to_string(), "space");
        assert_eq!(Query::Letter('E').to_string(), "E");
        assert_eq!(Query::Phrase("HELLO WORLD".into()).to_string(), "HELLO WORLD");
    }
}
