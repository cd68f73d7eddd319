//! Weighted candidate word
//!
//! A `WordEntry` pairs an uppercased corpus word with its (mutable) weight.

use std::fmt;

/// The 26 guessable letters, in the order ties are broken
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Word separator, guessed once before any letter
pub const SPACE: char = ' ';

/// A corpus word with its current weight
///
/// The text is fixed at construction. The weight starts as the raw corpus
/// count and is rescaled by normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    text: String,
    chars: Box<[char]>,
    weight: f64,
}

impl WordEntry {
    /// Create an entry, uppercasing the text
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::WordEntry;
    ///
    /// let entry = WordEntry::new("hello", 12.0);
    /// assert_eq!(entry.text(), "HELLO");
    /// assert_eq!(entry.len(), 5);
    /// assert_eq!(entry.count_of('L'), 2);
    /// ```
    #[must_use]
    pub fn new(text: &str, weight: f64) -> Self {
        let text = text.to_uppercase();
        let chars = text.chars().collect();
        Self {
            text,
            chars,
            weight,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at a 0-based offset, if any
    #[inline]
    #[must_use]
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Total occurrences of a letter anywhere in the word
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }

    pub(crate) fn scale(&mut self, divisor: f64) {
        self.weight /= divisor;
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.6})", self.text, self.weight)
    }
}
