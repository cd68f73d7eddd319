//! Solving session state
//!
//! A `Session` owns everything one game mutates: the slot layout, the
//! revealed phrase, one candidate set per slot, the guess history and the
//! guess counter. The orchestrator in `engine` drives it round by round.

use super::{
    CandidateSet, LetterScore, SolverConfig, apply_letter_response, joint_entropy, rank_letters,
};
use crate::core::{EngineError, GuessResponse, PhraseState, Query, SPACE, SlotLayout, WordEntry};
use rustc_hash::FxHashSet;
use std::fmt;

/// Oracle answer to any query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Letter(GuessResponse),
    Phrase(bool),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(response) => write!(f, "{response}"),
            Self::Phrase(true) => write!(f, "Y"),
            Self::Phrase(false) => write!(f, "N"),
        }
    }
}

/// One asked question and its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    /// Guess number shown when the question was asked
    pub number: usize,
    pub query: Query,
    pub reply: Reply,
}

/// Everything guessed so far; nothing here is ever guessed twice
#[derive(Debug, Clone, Default)]
pub struct GuessHistory {
    letters: FxHashSet<char>,
    phrases: FxHashSet<String>,
    records: Vec<GuessRecord>,
}

impl GuessHistory {
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    #[must_use]
    pub fn has_phrase(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    fn push(&mut self, record: GuessRecord) {
        match &record.query {
            Query::Letter(c) => {
                self.letters.insert(*c);
            }
            Query::Phrase(p) => {
                self.phrases.insert(p.clone());
            }
        }
        self.records.push(record);
    }
}

/// Per-slot view captured during a round
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSummary {
    pub index: usize,
    pub length: usize,
    /// Entropy before any collapse this round
    pub entropy: f64,
    pub collapsed: bool,
    pub remaining: usize,
    /// Highest-weight candidates with normalized weights
    pub top: Vec<(String, f64)>,
}

/// Snapshot of one round, taken before the round's guess is made
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub number: usize,
    pub guesses_used: usize,
    pub last_guess: Option<GuessRecord>,
    pub phrase: String,
    pub slots: Vec<SlotSummary>,
    pub joint_entropy: f64,
    /// Every unguessed letter, best first
    pub ranking: Vec<LetterScore>,
    /// Highest-weight candidate of each slot joined by spaces
    pub best_phrase: String,
}

impl Round {
    #[must_use]
    pub fn best_letter(&self) -> Option<char> {
        self.ranking.first().map(|s| s.letter)
    }
}

/// How the phrase was finally determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Every position was revealed by letter guesses
    Letters,
    /// A whole-phrase guess was confirmed
    PhraseGuess,
}

/// Result of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub phrase: String,
    pub resolution: Resolution,
    pub guesses_used: usize,
    pub rounds: usize,
    pub word_lengths: Vec<usize>,
    pub records: Vec<GuessRecord>,
}

/// Mutable state of one game
#[derive(Debug, Clone)]
pub struct Session {
    config: SolverConfig,
    layout: SlotLayout,
    phrase: PhraseState,
    slots: Vec<CandidateSet>,
    history: GuessHistory,
    guesses_used: usize,
    rounds: usize,
    resolution: Resolution,
}

impl Session {
    /// Start a game from the answer to the space guess
    ///
    /// The space guess counts as guess #1. Each slot starts with every corpus
    /// word of its length.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidLayout` if the response does not split the
    /// phrase into non-empty words.
    pub fn new(
        phrase_len: usize,
        space_response: GuessResponse,
        corpus: &[WordEntry],
        config: SolverConfig,
    ) -> Result<Self, EngineError> {
        let layout = SlotLayout::from_space_response(phrase_len, &space_response)?;

        let mut phrase = PhraseState::new(phrase_len);
        phrase.fill_spaces(&layout);

        let slots = layout
            .lengths()
            .iter()
            .enumerate()
            .map(|(slot, &length)| CandidateSet::for_slot(slot, length, corpus))
            .collect();

        let mut history = GuessHistory::default();
        history.push(GuessRecord {
            number: 1,
            query: Query::Letter(SPACE),
            reply: Reply::Letter(space_response),
        });

        Ok(Self {
            config,
            layout,
            phrase,
            slots,
            history,
            guesses_used: 1,
            rounds: 0,
            resolution: Resolution::Letters,
        })
    }

    #[must_use]
    pub const fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    #[must_use]
    pub const fn phrase(&self) -> &PhraseState {
        &self.phrase
    }

    #[must_use]
    pub fn slots(&self) -> &[CandidateSet] {
        &self.slots
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.guesses_used
    }

    /// Number shown for the next question
    #[must_use]
    pub const fn next_guess_number(&self) -> usize {
        self.guesses_used + 1
    }

    /// True once every position is known
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.phrase.is_complete()
    }

    /// Normalize, rank, collapse and measure the slots for a new round
    ///
    /// Letters are ranked on the normalized sets before any slot collapses.
    /// Collapsed sets are renormalized before the joint entropy is taken.
    ///
    /// # Errors
    /// Returns `EngineError::ExhaustedCandidates` if a slot has no candidates.
    pub fn prepare_round(&mut self) -> Result<Round, EngineError> {
        self.rounds += 1;

        for set in &mut self.slots {
            set.normalize()?;
        }

        let ranking = rank_letters(&self.slots, self.history.letters())?;

        let mut pre_collapse = Vec::with_capacity(self.slots.len());
        for set in &mut self.slots {
            let entropy = set.entropy()?;
            let collapsed = set.collapse_if_confident(self.config.confidence_threshold)?;
            set.normalize()?;
            pre_collapse.push((entropy, collapsed));
        }

        let slots = self
            .slots
            .iter()
            .zip(pre_collapse)
            .map(|(set, (entropy, collapsed))| SlotSummary {
                index: set.slot(),
                length: set.word_length(),
                entropy,
                collapsed,
                remaining: set.len(),
                top: set
                    .top(self.config.trace_depth)
                    .into_iter()
                    .map(|e| (e.text().to_string(), e.weight()))
                    .collect(),
            })
            .collect();

        Ok(Round {
            number: self.rounds,
            guesses_used: self.guesses_used,
            last_guess: self.history.last().cloned(),
            phrase: self.phrase.to_string(),
            slots,
            joint_entropy: joint_entropy(&self.slots)?,
            ranking,
            best_phrase: self.best_phrase(),
        })
    }

    /// Phrase worth guessing outright this round, if any
    ///
    /// Only when the joint entropy is at or below the confidence threshold
    /// and the same phrase has not been rejected before.
    #[must_use]
    pub fn phrase_to_try(&self, round: &Round) -> Option<String> {
        (round.joint_entropy <= self.config.confidence_threshold
            && !self.history.has_phrase(&round.best_phrase))
        .then(|| round.best_phrase.clone())
    }

    /// Record the verdict on a whole-phrase guess
    ///
    /// A confirmed phrase costs one guess and fills the phrase; a rejected one
    /// costs the configured penalty.
    pub fn record_phrase(&mut self, phrase: String, confirmed: bool) {
        let number = self.next_guess_number();
        if confirmed {
            self.phrase.reveal_all(&phrase);
            self.guesses_used += 1;
            self.resolution = Resolution::PhraseGuess;
        } else {
            self.guesses_used += self.config.phrase_penalty;
        }

        self.history.push(GuessRecord {
            number,
            query: Query::Phrase(phrase),
            reply: Reply::Phrase(confirmed),
        });
    }

    /// Filter every slot with a letter response and count the guess
    ///
    /// # Errors
    /// Returns `EngineError::InvalidPosition` for positions outside the phrase
    /// or on a space.
    pub fn apply_letter(&mut self, letter: char, response: GuessResponse) -> Result<(), EngineError> {
        apply_letter_response(
            letter,
            &response,
            &mut self.slots,
            &self.layout,
            &mut self.phrase,
        )?;

        let number = self.next_guess_number();
        self.history.push(GuessRecord {
            number,
            query: Query::Letter(letter),
            reply: Reply::Letter(response),
        });
        self.guesses_used += 1;
        Ok(())
    }

    #[must_use]
    pub fn into_outcome(self) -> Outcome {
        Outcome {
            phrase: self.phrase.to_string(),
            resolution: self.resolution,
            guesses_used: self.guesses_used,
            rounds: self.rounds,
            word_lengths: self.layout.lengths().to_vec(),
            records: self.history.records,
        }
    }

    fn best_phrase(&self) -> String {
        self.slots
            .iter()
            .map(|set| set.best().map_or("", WordEntry::text))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
