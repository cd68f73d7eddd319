//! Main solver interface

use super::{Outcome, Session, SolverConfig};
use crate::core::{EngineError, SPACE, WordEntry};
use crate::oracle::ResponseProvider;
use crate::trace::TraceSink;

/// Hangman phrase solver
///
/// Coordinates the solving process: guess the space, split the phrase into
/// slots, then run rounds until every position is known.
pub struct Solver<'a> {
    corpus: &'a [WordEntry],
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver over a weighted corpus
    #[must_use]
    pub const fn new(corpus: &'a [WordEntry], config: SolverConfig) -> Self {
        Self { corpus, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a [WordEntry] {
        self.corpus
    }

    /// Play one full game against an oracle
    ///
    /// Each round the slots are normalized, letters ranked and confident
    /// slots collapsed. When the joint entropy is at or below the confidence
    /// threshold the best phrase is guessed first; otherwise, or if it is
    /// rejected, the top-ranked letter is guessed.
    ///
    /// # Errors
    /// Returns `EngineError` if the oracle fails, a response is inconsistent
    /// with the layout, a slot runs out of candidates, or the trace sink
    /// cannot be written.
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::WordEntry;
    /// use hangman_entropy::oracle::KnownPhraseOracle;
    /// use hangman_entropy::solver::{Solver, SolverConfig};
    /// use hangman_entropy::trace::NullTrace;
    ///
    /// let corpus = vec![
    ///     WordEntry::new("cat", 10.0),
    ///     WordEntry::new("car", 5.0),
    ///     WordEntry::new("bat", 3.0),
    /// ];
    /// let solver = Solver::new(&corpus, SolverConfig::default());
    /// let mut oracle = KnownPhraseOracle::new("CAT");
    ///
    /// let outcome = solver.solve(3, &mut oracle, &mut NullTrace).unwrap();
    /// assert_eq!(outcome.phrase, "CAT");
    /// ```
    pub fn solve<R, T>(
        &self,
        phrase_len: usize,
        oracle: &mut R,
        trace: &mut T,
    ) -> Result<Outcome, EngineError>
    where
        R: ResponseProvider + ?Sized,
        T: TraceSink + ?Sized,
    {
        let space_response = oracle.letter(SPACE, 1)?;
        let mut session = Session::new(phrase_len, space_response, self.corpus, self.config)?;

        while !session.is_resolved() {
            let round = session.prepare_round()?;
            trace.round(&round).map_err(EngineError::Trace)?;
            oracle.observe(&round)?;

            if let Some(phrase) = session.phrase_to_try(&round) {
                let confirmed = oracle.phrase(&phrase, session.next_guess_number())?;
                session.record_phrase(phrase, confirmed);
                if confirmed {
                    break;
                }
            }

            let letter = round.best_letter().ok_or(EngineError::AlphabetExhausted)?;
            let response = oracle.letter(letter, session.next_guess_number())?;
            session.apply_letter(letter, response)?;
        }

        let outcome = session.into_outcome();
        trace.finish(&outcome).map_err(EngineError::Trace)?;
        oracle.conclude(&outcome)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessResponse, Query};
    use crate::oracle::{KnownPhraseOracle, ScriptedOracle, ScriptedReply};
    use crate::solver::Resolution;
    use crate::trace::NullTrace;

    fn corpus(words: &[(&str, f64)]) -> Vec<WordEntry> {
        words.iter().map(|&(w, c)| WordEntry::new(w, c)).collect()
    }

    fn letters(outcome: &Outcome) -> Vec<Query> {
        outcome.records.iter().map(|r| r.query.clone()).collect()
    }

    #[test]
    fn solves_cat_with_expected_guess_order() {
        let corpus = corpus(&[("CAT", 10.0), ("CAR", 5.0), ("BAT", 3.0)]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut oracle = KnownPhraseOracle::new("CAT");

        let outcome = solver.solve(3, &mut oracle, &mut NullTrace).unwrap();

        assert_eq!(outcome.phrase, "CAT");
        assert_eq!(outcome.resolution, Resolution::Letters);
        assert_eq!(
            letters(&outcome),
            vec![
                Query::Letter(' '),
                Query::Letter('A'),
                Query::Letter('C'),
                Query::Letter('T'),
            ]
        );
        assert_eq!(outcome.guesses_used, 4);
        assert_eq!(outcome.word_lengths, vec![3]);
    }

    #[test]
    fn scripted_replay_matches_known_oracle() {
        let corpus = corpus(&[("CAT", 10.0), ("CAR", 5.0), ("BAT", 3.0)]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut oracle = ScriptedOracle::new(vec![
            ScriptedReply::Letter(GuessResponse::Negative),
            ScriptedReply::Letter(GuessResponse::positive(vec![2]).unwrap()),
            ScriptedReply::Letter(GuessResponse::positive(vec![1]).unwrap()),
            ScriptedReply::Letter(GuessResponse::positive(vec![3]).unwrap()),
        ]);

        let outcome = solver.solve(3, &mut oracle, &mut NullTrace).unwrap();
        assert_eq!(outcome.phrase, "CAT");
        assert_eq!(oracle.asked().len(), 4);
        assert!(oracle.is_finished());
    }

    #[test]
    fn confident_phrase_is_guessed_outright() {
        let corpus = corpus(&[("GOOD", 100_000.0), ("GOAD", 1.0), ("MORNING", 50.0)]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut oracle = KnownPhraseOracle::new("GOOD MORNING");

        let outcome = solver.solve(12, &mut oracle, &mut NullTrace).unwrap();

        assert_eq!(outcome.phrase, "GOOD MORNING");
        assert_eq!(outcome.resolution, Resolution::PhraseGuess);
        assert_eq!(outcome.guesses_used, 2);
        assert_eq!(
            letters(&outcome),
            vec![Query::Letter(' '), Query::Phrase("GOOD MORNING".into())]
        );
    }

    #[test]
    fn rejected_phrase_costs_penalty_and_is_not_retried() {
        // CAT dominates and collapses, but the secret is CAR
        let corpus = corpus(&[("CAT", 10_000.0), ("CAR", 1.0)]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut oracle = KnownPhraseOracle::new("CAR");

        let outcome = solver.solve(3, &mut oracle, &mut NullTrace).unwrap();

        assert_eq!(outcome.phrase, "CAR");
        assert_eq!(outcome.records[1].query, Query::Phrase("CAT".into()));
        assert_eq!(outcome.records[1].number, 2);
        assert_eq!(outcome.records[2].query, Query::Letter('A'));
        assert_eq!(outcome.records[2].number, 5);
        // Zero scores keep alphabet order, so C (in the collapsed word) follows B
        assert_eq!(outcome.records[3].query, Query::Letter('B'));
        assert_eq!(outcome.records[4].query, Query::Letter('C'));

        let phrase_guesses = outcome
            .records
            .iter()
            .filter(|r| matches!(r.query, Query::Phrase(_)))
            .count();
        assert_eq!(phrase_guesses, 1);

        // Scores are all zero once the slot collapsed, so letters go A..=R
        assert_eq!(outcome.guesses_used, 1 + 3 + 18);
    }

    #[test]
    fn unknown_word_exhausts_slot() {
        let corpus = corpus(&[("CAT", 10.0), ("CAR", 5.0)]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut oracle = KnownPhraseOracle::new("DOG");

        let result = solver.solve(3, &mut oracle, &mut NullTrace);
        assert!(matches!(
            result,
            Err(EngineError::ExhaustedCandidates { slot: 0 })
        ));
    }

    #[test]
    fn invalid_space_layout_is_error() {
        let corpus = corpus(&[("CAT", 1.0)]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut oracle = ScriptedOracle::new(vec![ScriptedReply::Letter(
            GuessResponse::positive(vec![3]).unwrap(),
        )]);

        let result = solver.solve(3, &mut oracle, &mut NullTrace);
        assert!(matches!(result, Err(EngineError::InvalidLayout(_))));
    }

    #[test]
    fn oracle_failure_is_propagated() {
        let corpus = corpus(&[("CAT", 1.0)]);
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut oracle = ScriptedOracle::new(Vec::new());

        let result = solver.solve(3, &mut oracle, &mut NullTrace);
        assert!(matches!(result, Err(EngineError::Oracle(_))));
    }
}
