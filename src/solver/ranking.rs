//! Letter ranking heuristic
//!
//! score(L) = Σ_slots H(slot) × Σ_{c ∈ slot, L ∈ c} w(c) / W
//!
//! where H(slot) is the slot's normalized entropy and W is the sum of weights
//! across every slot. This weights each slot's occurrence mass by its own
//! uncertainty; it approximates information gain and is not an
//! expected-entropy-reduction computation.

use super::CandidateSet;
use crate::core::{ALPHABET, EngineError};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt;

/// Heuristic score for one letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScore {
    pub letter: char,
    pub score: f64,
}

impl fmt::Display for LetterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.6})", self.letter, self.score)
    }
}

/// Score and order every letter not yet guessed
///
/// Sorted by descending score. The sort is stable over alphabet order, so
/// equal scores come out A before B; this falls out of iteration order.
///
/// # Errors
/// Returns `EngineError::ExhaustedCandidates` if any slot has no weight.
///
/// # Examples
/// ```
/// use hangman_entropy::core::WordEntry;
/// use hangman_entropy::solver::{CandidateSet, rank_letters};
/// use rustc_hash::FxHashSet;
///
/// let corpus = vec![
///     WordEntry::new("cat", 10.0),
///     WordEntry::new("car", 5.0),
///     WordEntry::new("bat", 3.0),
/// ];
/// let slots = vec![CandidateSet::for_slot(0, 3, &corpus)];
/// let ranking = rank_letters(&slots, &FxHashSet::default()).unwrap();
/// assert_eq!(ranking[0].letter, 'A');
/// assert_eq!(ranking[1].letter, 'C');
/// ```
pub fn rank_letters(
    slots: &[CandidateSet],
    guessed: &FxHashSet<char>,
) -> Result<Vec<LetterScore>, EngineError> {
    let slot_entropies = slots
        .iter()
        .map(CandidateSet::entropy)
        .collect::<Result<Vec<f64>, _>>()?;
    let global_total: f64 = slots.iter().map(CandidateSet::total_weight).sum();

    let mut scores: Vec<LetterScore> = ALPHABET[..]
        .par_iter()
        .filter(|&letter| !guessed.contains(letter))
        .map(|&letter| LetterScore {
            letter,
            score: letter_score(letter, slots, &slot_entropies, global_total),
        })
        .collect();

    // -0.0 and +0.0 compare equal so zero scores keep alphabet order
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(scores)
}

fn letter_score(letter: char, slots: &[CandidateSet], entropies: &[f64], global_total: f64) -> f64 {
    slots
        .iter()
        .zip(entropies)
        .map(|(set, &h)| {
            let mass = set
                .entries()
                .iter()
                .filter(|e| e.contains(letter))
                .fold(0.0, |m, e| m + e.weight() / global_total);
            h * mass
        })
        .fold(0.0, |score, term| score + term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn slot(index: usize, words: &[(&str, f64)]) -> CandidateSet {
        let entries: Vec<WordEntry> = words.iter().map(|&(w, c)| WordEntry::new(w, c)).collect();
        let mut set = CandidateSet::from_entries(index, entries[0].len(), entries);
        set.normalize().unwrap();
        set
    }

    fn order(ranking: &[LetterScore]) -> String {
        ranking.iter().map(|s| s.letter).collect()
    }

    #[test]
    fn ranks_by_entropy_weighted_mass() {
        let slots = vec![slot(0, &[("CAT", 10.0), ("CAR", 5.0), ("BAT", 3.0)])];
        let ranking = rank_letters(&slots, &FxHashSet::default()).unwrap();

        assert_eq!(&order(&ranking)[..5], "ACTRB");

        let h = slots[0].entropy().unwrap();
        assert!((ranking[0].score - h).abs() < 1e-12);
        assert!((ranking[1].score - h * 15.0 / 18.0).abs() < 1e-12);
    }

    #[test]
    fn ties_break_alphabetically() {
        let slots = vec![slot(0, &[("CAT", 10.0), ("CAR", 5.0), ("BAT", 3.0)])];
        let ranking = rank_letters(&slots, &FxHashSet::default()).unwrap();

        // Letters absent from every candidate all score zero
        assert_eq!(&order(&ranking)[5..8], "DEF");
        assert_eq!(ranking.len(), 26);
    }

    #[test]
    fn zero_entropy_slot_ranks_alphabetically() {
        let slots = vec![slot(0, &[("CAT", 1.0)])];
        let ranking = rank_letters(&slots, &FxHashSet::default()).unwrap();

        assert_eq!(order(&ranking), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(ranking.iter().all(|s| s.score.abs() < f64::EPSILON && s.score.is_sign_positive()));
    }

    #[test]
    fn zero_scores_follow_guessed_letters() {
        let slots = vec![slot(0, &[("CAT", 1.0)])];
        let guessed: FxHashSet<char> = [' ', 'A'].into_iter().collect();
        let ranking = rank_letters(&slots, &guessed).unwrap();

        assert_eq!(&order(&ranking)[..3], "BCD");
    }

    #[test]
    fn guessed_letters_are_excluded() {
        let slots = vec![slot(0, &[("CAT", 10.0), ("CAR", 5.0), ("BAT", 3.0)])];
        let guessed: FxHashSet<char> = ['A', ' '].into_iter().collect();
        let ranking = rank_letters(&slots, &guessed).unwrap();

        assert_eq!(ranking.len(), 25);
        assert_eq!(ranking[0].letter, 'C');
        assert!(ranking.iter().all(|s| s.letter != 'A'));
    }

    #[test]
    fn counts_each_word_once_per_letter() {
        // EEL contains E twice but contributes its weight once
        let slots = vec![slot(0, &[("EEL", 1.0), ("OWL", 1.0)])];
        let ranking = rank_letters(&slots, &FxHashSet::default()).unwrap();
        let e = ranking.iter().find(|s| s.letter == 'E').unwrap();
        let w = ranking.iter().find(|s| s.letter == 'W').unwrap();
        assert!((e.score - w.score).abs() < 1e-12);
    }

    #[test]
    fn global_total_spans_all_slots() {
        let slots = vec![
            slot(0, &[("CAT", 1.0), ("COT", 1.0)]),
            slot(1, &[("DOG", 1.0)]),
        ];
        let ranking = rank_letters(&slots, &FxHashSet::default()).unwrap();
        let a = ranking.iter().find(|s| s.letter == 'A').unwrap();
        // H(slot 0) = 1 bit, CAT carries 0.5 of a global total of 2.0
        assert!((a.score - 0.25).abs() < 1e-12);
        // Singleton slot has zero entropy, so D scores nothing
        let d = ranking.iter().find(|s| s.letter == 'D').unwrap();
        assert!(d.score.abs() < f64::EPSILON);
    }

    #[test]
    fn exhausted_slot_is_error() {
        let slots = vec![CandidateSet::from_entries(0, 3, Vec::new())];
        assert!(matches!(
            rank_letters(&slots, &FxHashSet::default()),
            Err(EngineError::ExhaustedCandidates { slot: 0 })
        ));
    }
}
