//! Phrase solving engine
//!
//! Entropy bookkeeping over per-slot candidate sets, constraint filtering,
//! letter ranking and the round loop that ties them together.

mod candidates;
mod config;
mod engine;
pub mod entropy;
mod filter;
mod ranking;
mod session;

pub use candidates::CandidateSet;
pub use config::{CONFIDENCE_THRESHOLD, PHRASE_PENALTY, SolverConfig, TRACE_DEPTH};
pub use engine::Solver;
pub use entropy::{entropy, joint_entropy};
pub use filter::apply_letter_response;
pub use ranking::{LetterScore, rank_letters};
pub use session::{
    GuessHistory, GuessRecord, Outcome, Reply, Resolution, Round, Session, SlotSummary,
};
