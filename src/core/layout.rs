//! Slot layout of a phrase
//!
//! Built once from the response to guessing the space character. Positions
//! and slot starts are 1-based over the full phrase, spaces included.

use super::{EngineError, GuessResponse};

/// Start position and length of every word slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    phrase_len: usize,
    /// Slot starts followed by the sentinel `phrase_len + 2`
    starts: Vec<usize>,
    lengths: Vec<usize>,
}

impl SlotLayout {
    /// Derive the layout from the space response
    ///
    /// `Negative` yields a single slot; `Positive(p1..pk)` yields `k + 1`
    /// slots starting at 1 and `p_i + 1`.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidLayout` for a zero-length phrase, a space
    /// outside the phrase, or an empty slot (leading, trailing or doubled space).
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::{GuessResponse, SlotLayout};
    ///
    /// let response = GuessResponse::positive(vec![6]).unwrap();
    /// let layout = SlotLayout::from_space_response(11, &response).unwrap();
    /// assert_eq!(layout.starts(), &[1, 7]);
    /// assert_eq!(layout.lengths(), &[5, 5]);
    /// ```
    pub fn from_space_response(
        phrase_len: usize,
        response: &GuessResponse,
    ) -> Result<Self, EngineError> {
        if phrase_len == 0 {
            return Err(EngineError::InvalidLayout("phrase length is 0".into()));
        }

        let mut starts = vec![1];
        if let GuessResponse::Positive(positions) = response {
            if positions.max() > phrase_len {
                return Err(EngineError::InvalidLayout(format!(
                    "space at position {} beyond phrase length {phrase_len}",
                    positions.max()
                )));
            }
            starts.extend(positions.as_slice().iter().map(|p| p + 1));
        }
        starts.push(phrase_len + 2);

        let lengths: Vec<usize> = starts.windows(2).map(|w| w[1] - w[0] - 1).collect();
        if let Some(slot) = lengths.iter().position(|&len| len == 0) {
            return Err(EngineError::InvalidLayout(format!(
                "word {} would be empty",
                slot + 1
            )));
        }

        Ok(Self {
            phrase_len,
            starts,
            lengths,
        })
    }

    #[must_use]
    pub const fn phrase_len(&self) -> usize {
        self.phrase_len
    }

    /// Number of word slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Slot start positions, without the sentinel
    #[must_use]
    pub fn starts(&self) -> &[usize] {
        &self.starts[..self.lengths.len()]
    }

    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Positions occupied by separating spaces
    pub fn space_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.starts().iter().skip(1).map(|start| start - 1)
    }

    /// Index of the slot holding an absolute position
    ///
    /// Scans from the last slot down and returns the first whose start is
    /// `<= position`.
    #[must_use]
    pub fn which_word(&self, position: usize) -> usize {
        self.starts()
            .iter()
            .rposition(|&start| start <= position)
            .unwrap_or(0)
    }

    /// 0-based offset of a position inside its slot
    #[must_use]
    pub fn relative_offset(&self, slot: usize, position: usize) -> usize {
        position - self.starts[slot]
    }
}
