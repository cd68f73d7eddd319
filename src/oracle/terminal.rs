//! Line-oriented terminal oracle
//!
//! Prompts a human for each guess and re-prompts until the reply parses.

use super::reply::{
    ReplyError, parse_length, parse_letter_reply, parse_phrase_reply, reject_spaces,
};
use super::{OracleError, ResponseProvider};
use crate::core::{GuessResponse, SPACE};
use crate::solver::{Outcome, Round};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Oracle backed by a reader and a writer (usually stdin and stdout)
pub struct TerminalOracle<R: BufRead, W: Write> {
    input: R,
    output: W,
    phrase_len: Option<usize>,
    spaces: Vec<usize>,
}

impl TerminalOracle<StdinLock<'static>, Stdout> {
    /// Oracle on the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalOracle<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            phrase_len: None,
            spaces: Vec::new(),
        }
    }

    /// Positions beyond `len` are re-prompted instead of accepted
    #[must_use]
    pub fn with_phrase_len(mut self, len: usize) -> Self {
        self.phrase_len = Some(len);
        self
    }

    /// Ask how long the phrase is, spaces included
    ///
    /// # Errors
    /// Returns `OracleError` on I/O failure or end of input.
    pub fn ask_phrase_length(&mut self) -> Result<usize, OracleError> {
        writeln!(self.output, "How many characters in this phrase (including spaces)?")?;
        let len = self.read_until_valid(parse_length, "Please enter a positive number: ")?;
        self.phrase_len = Some(len);
        Ok(len)
    }

    /// Consume the oracle, returning its writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_until_valid<T, F>(&mut self, parse: F, retry: &str) -> Result<T, OracleError>
    where
        F: Fn(&str) -> Result<T, ReplyError>,
    {
        loop {
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(OracleError::Closed);
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => write!(self.output, "{e}. {retry}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ResponseProvider for TerminalOracle<R, W> {
    fn letter(&mut self, letter: char, guess_number: usize) -> Result<GuessResponse, OracleError> {
        if letter == SPACE {
            writeln!(self.output, "Guess #{guess_number}: Is there a space?")?;
        } else {
            writeln!(self.output, "Guess #{guess_number}: Is there a(n) {letter}?")?;
        }

        let phrase_len = self.phrase_len;
        let spaces = self.spaces.clone();
        let response = self.read_until_valid(
            |line| parse_letter_reply(line, phrase_len).and_then(|r| reject_spaces(r, &spaces)),
            "Please begin your response with Y/N (e.g. 'Y, 3, 4' or 'N'): ",
        )?;

        if letter == SPACE
            && let GuessResponse::Positive(positions) = &response
        {
            self.spaces = positions.as_slice().to_vec();
        }
        Ok(response)
    }

    fn phrase(&mut self, phrase: &str, guess_number: usize) -> Result<bool, OracleError> {
        writeln!(self.output, "Guess #{guess_number}: Is the phrase {phrase}?")?;
        self.read_until_valid(parse_phrase_reply, "Please enter Y/N: ")
    }

    fn observe(&mut self, round: &Round) -> Result<(), OracleError> {
        writeln!(self.output, "----------------------------------")?;
        writeln!(self.output, "Phrase: {}", round.phrase)?;
        Ok(())
    }

    fn conclude(&mut self, outcome: &Outcome) -> Result<(), OracleError> {
        writeln!(self.output, "----------------------------------")?;
        writeln!(
            self.output,
            "Phrase: {} ({} guesses)",
            outcome.phrase, outcome.guesses_used
        )?;
        Ok(())
    }
}
