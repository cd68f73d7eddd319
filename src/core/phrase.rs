//! Partially revealed phrase

use super::{SPACE, SlotLayout};
use std::fmt;

/// Marker rendered for positions not yet revealed
pub const UNKNOWN: char = '*';

/// One slot per absolute position; `None` until revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseState {
    cells: Vec<Option<char>>,
}

impl PhraseState {
    /// All-unknown phrase of the given length
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Fill the separating spaces of a layout
    pub fn fill_spaces(&mut self, layout: &SlotLayout) {
        for position in layout.space_positions() {
            self.reveal(position, SPACE);
        }
    }

    /// Set a 1-based position; out-of-range positions are ignored
    pub fn reveal(&mut self, position: usize, letter: char) {
        if let Some(cell) = position.checked_sub(1).and_then(|i| self.cells.get_mut(i)) {
            *cell = Some(letter);
        }
    }

    /// Overwrite every position from a confirmed phrase
    pub fn reveal_all(&mut self, phrase: &str) {
        for (cell, c) in self.cells.iter_mut().zip(phrase.chars()) {
            *cell = Some(c);
        }
    }

    /// Character at a 1-based position, if revealed
    #[must_use]
    pub fn get(&self, position: usize) -> Option<char> {
        position
            .checked_sub(1)
            .and_then(|i| self.cells.get(i))
            .copied()
            .flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True once no position is unknown
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

impl fmt::Display for PhraseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.cells.iter().map(|c| c.unwrap_or(UNKNOWN)).collect();
        write!(f, "{rendered}")
    }
}
