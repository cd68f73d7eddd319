//! Hangman Entropy Solver
//!
//! Guesses a hidden phrase letter by letter, tracking a weighted set of
//! candidate words per word slot and picking the letter whose answer is
//! expected to remove the most uncertainty.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_entropy::core::WordEntry;
//! use hangman_entropy::oracle::KnownPhraseOracle;
//! use hangman_entropy::solver::{Solver, SolverConfig};
//! use hangman_entropy::trace::NullTrace;
//!
//! let corpus = vec![
//!     WordEntry::new("hello", 100.0),
//!     WordEntry::new("hills", 20.0),
//!     WordEntry::new("world", 80.0),
//! ];
//! let solver = Solver::new(&corpus, SolverConfig::default());
//!
//! // Answers every question truthfully from the secret phrase
//! let mut oracle = KnownPhraseOracle::new("hello world");
//! let outcome = solver.solve(11, &mut oracle, &mut NullTrace).unwrap();
//!
//! assert_eq!(outcome.phrase, "HELLO WORLD");
//! println!("Solved in {} guesses", outcome.guesses_used);
//! ```

// Core domain types
pub mod core;

// Candidate sets, entropy and the solving loop
pub mod solver;

// Sources of answers
pub mod oracle;

// Word-frequency corpora
pub mod corpus;

// Per-round diagnostics
pub mod trace;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
