//! Constraint filtering after a letter response
//!
//! A negative response removes the letter everywhere. A positive response
//! pins the letter at the reported offsets of each slot it landed in and
//! requires the word's total count of the letter to match exactly; slots
//! that received no position must not contain the letter at all.

use super::CandidateSet;
use crate::core::{EngineError, GuessResponse, PhraseState, SlotLayout};
use rustc_hash::FxHashMap;

/// Apply a letter response to every slot and reveal positions in the phrase
///
/// # Errors
/// Returns `EngineError::InvalidPosition` if a position lies outside the
/// phrase or on a known space. Nothing is modified in that case.
///
/// # Examples
/// ```
/// use hangman_entropy::core::{GuessResponse, PhraseState, SlotLayout, WordEntry};
/// use hangman_entropy::solver::{CandidateSet, apply_letter_response};
///
/// let corpus = vec![WordEntry::new("hello", 1.0), WordEntry::new("world", 1.0)];
/// let layout = SlotLayout::from_space_response(5, &GuessResponse::Negative).unwrap();
/// let mut slots = vec![CandidateSet::for_slot(0, 5, &corpus)];
/// let mut phrase = PhraseState::new(5);
///
/// let response = GuessResponse::positive(vec![3, 4]).unwrap();
/// apply_letter_response('L', &response, &mut slots, &layout, &mut phrase).unwrap();
/// assert_eq!(slots[0].len(), 1);
/// assert_eq!(phrase.to_string(), "**LL*");
/// ```
pub fn apply_letter_response(
    letter: char,
    response: &GuessResponse,
    slots: &mut [CandidateSet],
    layout: &SlotLayout,
    phrase: &mut PhraseState,
) -> Result<(), EngineError> {
    let GuessResponse::Positive(positions) = response else {
        for set in slots.iter_mut() {
            set.retain_by(|e| !e.contains(letter));
        }
        return Ok(());
    };

    let phrase_len = layout.phrase_len();
    let layout_spaces: Vec<usize> = layout.space_positions().collect();
    if let Some(&position) = positions
        .as_slice()
        .iter()
        .find(|&&p| p > phrase_len || layout_spaces.contains(&p))
    {
        return Err(EngineError::InvalidPosition {
            position,
            phrase_len,
        });
    }

    let offsets = bucket_offsets(positions.as_slice(), layout);

    for set in slots.iter_mut() {
        match offsets.get(&set.slot()) {
            Some(slot_offsets) => {
                let expected = slot_offsets.len();
                set.retain_by(|e| {
                    slot_offsets.iter().all(|&o| e.char_at(o) == Some(letter))
                        && e.count_of(letter) == expected
                });
            }
            None => set.retain_by(|e| !e.contains(letter)),
        }
    }

    for &position in positions.as_slice() {
        phrase.reveal(position, letter);
    }

    Ok(())
}

/// Group absolute positions by slot as 0-based offsets
fn bucket_offsets(positions: &[usize], layout: &SlotLayout) -> FxHashMap<usize, Vec<usize>> {
    let mut buckets: FxHashMap<usize, Vec<usize>> = FxHashMap::default();

    for &position in positions {
        let slot = layout.which_word(position);
        buckets
            .entry(slot)
            .or_default()
            .push(layout.relative_offset(slot, position));
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn words(list: &[&str]) -> Vec<WordEntry> {
        list.iter().map(|w| WordEntry::new(w, 1.0)).collect()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.entries().iter().map(WordEntry::text).collect()
    }

    fn setup(len: usize, spaces: Vec<usize>, corpus: &[WordEntry]) -> (SlotLayout, Vec<CandidateSet>, PhraseState) {
        let response = if spaces.is_empty() {
            GuessResponse::Negative
        } else {
            GuessResponse::positive(spaces).unwrap()
        };
        let layout = SlotLayout::from_space_response(len, &response).unwrap();
        let slots = layout
            .lengths()
            .iter()
            .enumerate()
            .map(|(i, &l)| CandidateSet::for_slot(i, l, corpus))
            .collect();
        let mut phrase = PhraseState::new(len);
        phrase.fill_spaces(&layout);
        (layout, slots, phrase)
    }

    #[test]
    fn negative_removes_letter_everywhere() {
        let corpus = words(&["CAT", "DOG", "COW", "PIG"]);
        let (layout, mut slots, mut phrase) = setup(7, vec![4], &corpus);

        apply_letter_response('O', &GuessResponse::Negative, &mut slots, &layout, &mut phrase)
            .unwrap();

        assert_eq!(texts(&slots[0]), vec!["CAT", "PIG"]);
        assert_eq!(texts(&slots[1]), vec!["CAT", "PIG"]);
        assert_eq!(phrase.to_string(), "*** ***");
    }

    #[test]
    fn positive_enforces_exact_count() {
        let corpus = words(&["HELLO", "HALLS", "SKILL", "HOLLY", "LILLY"]);
        let (layout, mut slots, mut phrase) = setup(5, vec![], &corpus);

        let response = GuessResponse::positive(vec![3, 4]).unwrap();
        apply_letter_response('L', &response, &mut slots, &layout, &mut phrase).unwrap();

        // LILLY has L at 3 and 4 plus a third L
        assert_eq!(texts(&slots[0]), vec!["HELLO", "HALLS", "HOLLY"]);
        for entry in slots[0].entries() {
            assert_eq!(entry.char_at(2), Some('L'));
            assert_eq!(entry.char_at(3), Some('L'));
            assert_eq!(entry.count_of('L'), 2);
        }
        assert_eq!(phrase.to_string(), "**LL*");
    }

    #[test]
    fn positive_removes_letter_from_untouched_slots() {
        let corpus = words(&["HELLO", "WORLD", "LEMON", "TABLE"]);
        let (layout, mut slots, mut phrase) = setup(11, vec![6], &corpus);

        // "HELLO WORLD": O at 5 and 8
        let response = GuessResponse::positive(vec![5, 8]).unwrap();
        apply_letter_response('O', &response, &mut slots, &layout, &mut phrase).unwrap();

        assert_eq!(texts(&slots[0]), vec!["HELLO"]);
        assert_eq!(texts(&slots[1]), vec!["WORLD"]);
        assert_eq!(phrase.to_string(), "****O *O***");
    }

    #[test]
    fn positive_in_one_slot_clears_other() {
        let corpus = words(&["CAT", "CAR", "BAT", "ACE"]);
        let (layout, mut slots, mut phrase) = setup(7, vec![4], &corpus);

        let response = GuessResponse::positive(vec![1]).unwrap();
        apply_letter_response('C', &response, &mut slots, &layout, &mut phrase).unwrap();

        assert_eq!(texts(&slots[0]), vec!["CAT", "CAR"]);
        assert_eq!(texts(&slots[1]), vec!["BAT"]);
    }

    #[test]
    fn rejects_position_beyond_phrase() {
        let corpus = words(&["CAT"]);
        let (layout, mut slots, mut phrase) = setup(3, vec![], &corpus);

        let response = GuessResponse::positive(vec![4]).unwrap();
        let result = apply_letter_response('C', &response, &mut slots, &layout, &mut phrase);

        assert!(matches!(
            result,
            Err(EngineError::InvalidPosition {
                position: 4,
                phrase_len: 3
            })
        ));
        assert_eq!(slots[0].len(), 1);
    }

    #[test]
    fn rejects_position_on_space() {
        let corpus = words(&["CAT"]);
        let (layout, mut slots, mut phrase) = setup(7, vec![4], &corpus);

        let response = GuessResponse::positive(vec![4]).unwrap();
        let result = apply_letter_response('C', &response, &mut slots, &layout, &mut phrase);
        assert!(matches!(result, Err(EngineError::InvalidPosition { position: 4, .. })));
    }

    #[test]
    fn filtering_can_exhaust_a_slot() {
        let corpus = words(&["CAT"]);
        let (layout, mut slots, mut phrase) = setup(3, vec![], &corpus);

        let response = GuessResponse::positive(vec![2]).unwrap();
        apply_letter_response('O', &response, &mut slots, &layout, &mut phrase).unwrap();

        assert!(slots[0].is_empty());
        assert!(matches!(
            slots[0].normalize(),
            Err(EngineError::ExhaustedCandidates { slot: 0 })
        ));
    }

    #[test]
    fn bucket_offsets_groups_by_slot() {
        let layout =
            SlotLayout::from_space_response(11, &GuessResponse::positive(vec![6]).unwrap())
                .unwrap();
        let buckets = bucket_offsets(&[3, 4, 10], &layout);
        assert_eq!(buckets.get(&0), Some(&vec![2, 3]));
        assert_eq!(buckets.get(&1), Some(&vec![3]));
    }
}
