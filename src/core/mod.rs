//! Core domain types for the phrase solver
//!
//! Candidate words, oracle responses, the slot layout of a phrase and the
//! partially revealed phrase itself. Everything here is pure and testable.

mod error;
mod layout;
mod phrase;
mod response;
mod word;

pub use error::EngineError;
pub use layout::SlotLayout;
pub use phrase::PhraseState;
pub use response::{GuessResponse, Positions, PositionsError, Query};
pub use word::{ALPHABET, SPACE, WordEntry};
