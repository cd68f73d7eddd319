//! TUI application state and logic

use crate::core::{EngineError, GuessResponse, Query, SPACE};
use crate::oracle::{
    OracleError, ReplyError, ResponseProvider, parse_length, parse_letter_reply,
    parse_phrase_reply, reject_spaces,
};
use crate::solver::{GuessRecord, Outcome, Reply, Round, Solver};
use crate::trace::TraceSink;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;

/// Question currently shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Length,
    Letter { letter: char, number: usize },
    Phrase { phrase: String, number: usize },
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What a key press asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Submit(String),
    Cancel,
}

/// Application state
pub struct App {
    pub prompt: Prompt,
    pub input_buffer: String,
    pub phrase_len: Option<usize>,
    /// Positions answered for the space guess
    pub spaces: Vec<usize>,
    pub round: Option<Round>,
    pub history: Vec<GuessRecord>,
    pub messages: Vec<Message>,
    pub outcome: Option<Outcome>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt: Prompt::Length,
            input_buffer: String::new(),
            phrase_len: None,
            spaces: Vec::new(),
            round: None,
            history: Vec::new(),
            messages: vec![Message {
                text: "Think of a phrase. I'll ask about letters until I know it.".to_string(),
                style: MessageStyle::Info,
            }],
            outcome: None,
        }
    }

    /// Apply one key press to the input line
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
            KeyCode::Esc => KeyAction::Cancel,
            _ if self.prompt == Prompt::Finished => KeyAction::Submit(String::new()),
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                KeyAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                KeyAction::None
            }
            KeyCode::Enter => KeyAction::Submit(std::mem::take(&mut self.input_buffer)),
            _ => KeyAction::None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn record(&mut self, number: usize, query: Query, reply: Reply) {
        self.history.push(GuessRecord {
            number,
            query,
            reply,
        });
    }
}

/// Oracle that asks the user through the TUI
///
/// `next_event` supplies terminal events; in a real session it is
/// `crossterm::event::read`.
pub struct TuiOracle<'t, B: Backend, E> {
    terminal: &'t mut Terminal<B>,
    next_event: E,
    app: App,
}

impl<'t, B, E> TuiOracle<'t, B, E>
where
    B: Backend,
    E: FnMut() -> io::Result<Event>,
{
    pub fn new(terminal: &'t mut Terminal<B>, next_event: E) -> Self {
        Self {
            terminal,
            next_event,
            app: App::new(),
        }
    }

    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    /// Ask how long the phrase is, spaces included
    ///
    /// # Errors
    /// Returns `OracleError` if the terminal fails or the user cancels.
    pub fn ask_phrase_length(&mut self) -> Result<usize, OracleError> {
        let len = self.ask(Prompt::Length, parse_length)?;
        self.app.phrase_len = Some(len);
        Ok(len)
    }

    /// Positions beyond `len` are rejected instead of accepted
    pub fn set_phrase_len(&mut self, len: usize) {
        self.app.phrase_len = Some(len);
    }

    fn draw(&mut self) -> Result<(), OracleError> {
        let app = &self.app;
        self.terminal.draw(|f| super::rendering::ui(f, app))?;
        Ok(())
    }

    /// Redraw and read keys until a submitted line parses
    fn ask<T, F>(&mut self, prompt: Prompt, parse: F) -> Result<T, OracleError>
    where
        F: Fn(&str) -> Result<T, ReplyError>,
    {
        self.app.prompt = prompt;
        self.app.input_buffer.clear();

        loop {
            self.draw()?;

            let Event::Key(key) = (self.next_event)()? else {
                continue;
            };

            match self.app.handle_key(key) {
                KeyAction::None => {}
                KeyAction::Cancel => return Err(OracleError::Cancelled),
                KeyAction::Submit(line) => match parse(&line) {
                    Ok(value) => return Ok(value),
                    Err(e) => self.app.add_message(&e.to_string(), MessageStyle::Error),
                },
            }
        }
    }
}

impl<B, E> ResponseProvider for TuiOracle<'_, B, E>
where
    B: Backend,
    E: FnMut() -> io::Result<Event>,
{
    fn letter(&mut self, letter: char, guess_number: usize) -> Result<GuessResponse, OracleError> {
        let phrase_len = self.app.phrase_len;
        let prompt = Prompt::Letter {
            letter,
            number: guess_number,
        };
        let spaces = self.app.spaces.clone();
        let response = self.ask(prompt, |line| {
            parse_letter_reply(line, phrase_len).and_then(|r| reject_spaces(r, &spaces))
        })?;

        if letter == SPACE
            && let GuessResponse::Positive(positions) = &response
        {
            self.app.spaces = positions.as_slice().to_vec();
        }

        self.app.record(
            guess_number,
            Query::Letter(letter),
            Reply::Letter(response.clone()),
        );
        Ok(response)
    }

    fn phrase(&mut self, phrase: &str, guess_number: usize) -> Result<bool, OracleError> {
        let prompt = Prompt::Phrase {
            phrase: phrase.to_string(),
            number: guess_number,
        };
        let confirmed = self.ask(prompt, parse_phrase_reply)?;

        self.app.record(
            guess_number,
            Query::Phrase(phrase.to_string()),
            Reply::Phrase(confirmed),
        );
        if !confirmed {
            self.app
                .add_message(&format!("Not {phrase}, back to letters"), MessageStyle::Info);
        }
        Ok(confirmed)
    }

    fn observe(&mut self, round: &Round) -> Result<(), OracleError> {
        self.app.round = Some(round.clone());
        Ok(())
    }

    fn conclude(&mut self, outcome: &Outcome) -> Result<(), OracleError> {
        self.app.outcome = Some(outcome.clone());
        self.app.add_message(
            &format!("Solved in {} guesses! Press any key.", outcome.guesses_used),
            MessageStyle::Success,
        );
        self.ask(Prompt::Finished, |_| Ok(()))
    }
}

/// Play one game inside an already set up terminal
///
/// # Errors
///
/// Returns `EngineError` if the user cancels, drawing fails, or the
/// answers leave a word with no candidates.
pub fn play_in_terminal<B, E, T>(
    terminal: &mut Terminal<B>,
    next_event: E,
    solver: &Solver,
    length: Option<usize>,
    trace: &mut T,
) -> Result<Outcome, EngineError>
where
    B: Backend,
    E: FnMut() -> io::Result<Event>,
    T: TraceSink + ?Sized,
{
    let mut oracle = TuiOracle::new(terminal, next_event);
    let length = match length {
        Some(len) => {
            oracle.set_phrase_len(len);
            len
        }
        None => oracle.ask_phrase_length()?,
    };

    solver.solve(length, &mut oracle, trace)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or the game ends
/// without a solution.
pub fn run_tui<T: TraceSink + ?Sized>(
    solver: &Solver,
    length: Option<usize>,
    trace: &mut T,
) -> Result<Outcome> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = play_in_terminal(&mut terminal, event::read, solver, length, trace);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(res?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::solver::SolverConfig;
    use crate::trace::NullTrace;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> Vec<Event> {
        let mut events: Vec<Event> = text
            .chars()
            .map(|c| Event::Key(key(KeyCode::Char(c))))
            .collect();
        events.push(Event::Key(key(KeyCode::Enter)));
        events
    }

    fn script(lines: &[&str]) -> impl FnMut() -> io::Result<Event> {
        let mut events: VecDeque<Event> = lines.iter().flat_map(|l| typed(l)).collect();
        move || {
            events
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
        }
    }

    fn corpus() -> Vec<WordEntry> {
        vec![
            WordEntry::new("CAT", 10.0),
            WordEntry::new("CAR", 5.0),
            WordEntry::new("BAT", 3.0),
        ]
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = App::new();
        assert_eq!(app.handle_key(key(KeyCode::Char('y'))), KeyAction::None);
        assert_eq!(app.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(app.handle_key(key(KeyCode::Backspace)), KeyAction::None);
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            KeyAction::Submit("y".to_string())
        );
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn escape_and_ctrl_c_cancel() {
        let mut app = App::new();
        assert_eq!(app.handle_key(key(KeyCode::Esc)), KeyAction::Cancel);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), KeyAction::Cancel);
    }

    #[test]
    fn finished_prompt_accepts_any_key() {
        let mut app = App::new();
        app.prompt = Prompt::Finished;
        assert_eq!(
            app.handle_key(key(KeyCode::Char('q'))),
            KeyAction::Submit(String::new())
        );
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }

    #[test]
    fn full_game_through_tui() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        // Length, space, A, C, T, then any key on the final screen
        let events = script(&["3", "n", "y, 2", "y, 1", "y, 3", ""]);
        let outcome =
            play_in_terminal(&mut terminal, events, &solver, None, &mut NullTrace).unwrap();

        assert_eq!(outcome.phrase, "CAT");
        assert_eq!(outcome.guesses_used, 4);
    }

    #[test]
    fn invalid_reply_is_reasked() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        let events = script(&["maybe", "n", "y, 9", "y, 2", "y, 1", "y, 3", ""]);
        let outcome =
            play_in_terminal(&mut terminal, events, &solver, Some(3), &mut NullTrace).unwrap();

        assert_eq!(outcome.phrase, "CAT");
    }

    #[test]
    fn letter_on_known_space_is_reasked() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut oracle = TuiOracle::new(&mut terminal, script(&["y, 4", "y, 4", "y, 2"]));
        oracle.set_phrase_len(7);

        oracle.letter(SPACE, 1).unwrap();
        assert_eq!(oracle.app().spaces, vec![4]);

        let response = oracle.letter('A', 2).unwrap();
        assert_eq!(response, GuessResponse::positive(vec![2]).unwrap());
        assert!(
            oracle
                .app()
                .messages
                .iter()
                .any(|m| m.text == "position 4 is a space")
        );
        assert_eq!(oracle.app().history.len(), 2);
    }

    #[test]
    fn escape_cancels_game() {
        let corpus = corpus();
        let solver = Solver::new(&corpus, SolverConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        let mut events = VecDeque::from(vec![Event::Key(key(KeyCode::Esc))]);
        let next = move || {
            events
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
        };
        let result = play_in_terminal(&mut terminal, next, &solver, Some(3), &mut NullTrace);

        assert!(matches!(
            result,
            Err(EngineError::Oracle(OracleError::Cancelled))
        ));
    }

    #[test]
    fn space_prompt_is_rendered() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut oracle = TuiOracle::new(&mut terminal, script(&["n"]));
        oracle.set_phrase_len(3);

        let response = oracle.letter(SPACE, 1).unwrap();
        assert_eq!(response, GuessResponse::Negative);
        assert_eq!(oracle.app().history.len(), 1);
    }
}
