//! Benchmark command
//!
//! Solves many random phrases in parallel and summarizes the guess counts.

use crate::core::{ALPHABET, WordEntry};
use crate::oracle::KnownPhraseOracle;
use crate::solver::{Outcome, Resolution, Solver};
use crate::trace::NullTrace;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub seed: u64,
    pub total: usize,
    pub solved: usize,
    /// Phrases the solver gave up on, with the reason
    pub failures: Vec<(String, String)>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    /// Solved games that ended on a confirmed phrase guess
    pub phrase_guesses: usize,
    pub duration: Duration,
    pub phrases_per_second: f64,
}

/// Draw `count` random phrases of `words` corpus words each
///
/// Only words made of plain letters are used. Returns an empty list when
/// the corpus has none.
#[must_use]
pub fn sample_phrases(corpus: &[WordEntry], count: usize, words: usize, seed: u64) -> Vec<String> {
    let pool: Vec<&str> = corpus
        .iter()
        .map(WordEntry::text)
        .filter(|w| !w.is_empty() && w.chars().all(|c| ALPHABET.contains(&c)))
        .collect();
    if pool.is_empty() || words == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (0..words)
                .filter_map(|_| pool.choose(&mut rng).copied())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Solve every phrase and collect statistics
pub fn run_benchmark(
    solver: &Solver,
    phrases: &[String],
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(phrases.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<(&String, Result<Outcome, String>)> = phrases
        .par_iter()
        .map(|phrase| {
            let mut oracle = KnownPhraseOracle::new(phrase);
            let result = solver
                .solve(oracle.len(), &mut oracle, &mut NullTrace)
                .map_err(|e| e.to_string());
            pb.inc(1);
            (phrase, result)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut failures = Vec::new();
    let mut distribution = BTreeMap::new();
    let mut total_guesses = 0;
    let mut phrase_guesses = 0;

    for (phrase, result) in results {
        match result {
            Ok(outcome) if outcome.phrase == phrase.to_uppercase() => {
                total_guesses += outcome.guesses_used;
                *distribution.entry(outcome.guesses_used).or_insert(0) += 1;
                if outcome.resolution == Resolution::PhraseGuess {
                    phrase_guesses += 1;
                }
            }
            Ok(outcome) => failures.push((phrase.clone(), format!("ended on {}", outcome.phrase))),
            Err(reason) => failures.push((phrase.clone(), reason)),
        }
    }

    let solved = phrases.len() - failures.len();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        seed,
        total: phrases.len(),
        solved,
        failures,
        total_guesses,
        average_guesses,
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        phrase_guesses,
        duration,
        phrases_per_second: if secs > 0.0 {
            phrases.len() as f64 / secs
        } else {
            0.0
        },
    }
}
