//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, KeyAction, Message, MessageStyle, Prompt, TuiOracle, play_in_terminal, run_tui};
