//! Hangman Entropy Solver - CLI
//!
//! Phrase-guessing solver with terminal, TUI, self-play and benchmark modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_entropy::{
    commands::{run_benchmark, run_play, sample_phrases, solve_phrase},
    core::WordEntry,
    corpus::{default_corpus, load_corpus},
    output::{print_benchmark_result, print_outcome, print_solve_result},
    solver::{CONFIDENCE_THRESHOLD, Solver, SolverConfig},
    trace::{FileTrace, NullTrace, TraceSink},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman_entropy",
    about = "Hangman phrase solver using Shannon entropy over per-word candidate sets",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word-frequency file with one 'word count' pair per line (default: embedded corpus)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Entropy in bits at or below which a word or phrase counts as known
    #[arg(short, long, global = true, default_value_t = CONFIDENCE_THRESHOLD)]
    threshold: f64,

    /// Write a round-by-round trace to this file
    #[arg(long, global = true)]
    trace: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the solver's questions on the terminal (default)
    Play {
        /// Phrase length including spaces (asked if omitted)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Interactive TUI mode
    Tui {
        /// Phrase length including spaces (asked if omitted)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Solve a specific phrase
    Solve {
        /// The phrase to solve
        phrase: String,

        /// Show every round's candidates and letter ranking
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random phrases
    Benchmark {
        /// Number of random phrases to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Words per phrase
        #[arg(short, long, default_value = "2")]
        words: usize,

        /// Seed for phrase sampling (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn load(path: Option<&Path>) -> Result<Vec<WordEntry>> {
    match path {
        Some(path) => load_corpus(path)
            .with_context(|| format!("failed to load corpus from {}", path.display())),
        None => Ok(default_corpus()),
    }
}

fn open_trace(path: Option<&Path>, depth: usize) -> Result<Box<dyn TraceSink>> {
    match path {
        Some(path) => {
            let trace = FileTrace::create(path, depth)
                .with_context(|| format!("failed to create trace file {}", path.display()))?;
            Ok(Box::new(trace))
        }
        None => Ok(Box::new(NullTrace)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.threshold.is_nan() || cli.threshold < 0.0 {
        bail!("threshold must be a non-negative number of bits");
    }

    let corpus = load(cli.corpus.as_deref())?;
    if corpus.is_empty() {
        bail!("corpus is empty");
    }

    let config = SolverConfig::new(cli.threshold);
    let solver = Solver::new(&corpus, config);
    let mut trace = open_trace(cli.trace.as_deref(), config.trace_depth)?;

    // Default to terminal play if no command given
    let command = cli.command.unwrap_or(Commands::Play { length: None });

    match command {
        Commands::Play { length } => {
            let outcome = run_play(&solver, length, trace.as_mut())?;
            print_outcome(&outcome);
        }
        Commands::Tui { length } => {
            use hangman_entropy::interactive::run_tui;

            let outcome = run_tui(&solver, length, trace.as_mut())?;
            print_outcome(&outcome);
        }
        Commands::Solve { phrase, verbose } => {
            let result = solve_phrase(&solver, &phrase, trace.as_mut())?;
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark { count, words, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("Running benchmark on {count} random {words}-word phrases...");

            let phrases = sample_phrases(&corpus, count, words, seed);
            if phrases.is_empty() {
                bail!("no corpus words made only of letters A-Z to sample from");
            }
            let result = run_benchmark(&solver, &phrases, seed, true);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
