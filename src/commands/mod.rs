//! Command implementations for the CLI

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_phrases};
pub use play::{play_session, run_play};
pub use solve::{SolveResult, solve_phrase};
