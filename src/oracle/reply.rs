//! Reply grammar for human oracles
//!
//! Letter replies are `N` or `Y, p1, p2, ...` with 1-based positions.
//! Phrase replies only need the leading `Y` or `N`. Case and surrounding
//! whitespace are ignored.

use crate::core::{GuessResponse, Positions};
use std::fmt;

/// Why a reply could not be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    Empty,
    BadPrefix(String),
    MissingPositions,
    BadPosition(String),
    OutOfRange { position: usize, phrase_len: usize },
    /// A letter reported where the space guess put a space
    OnSpace(usize),
    BadLength(String),
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty reply"),
            Self::BadPrefix(token) => write!(f, "reply must start with Y or N, got '{token}'"),
            Self::MissingPositions => write!(f, "Y must be followed by positions, e.g. 'Y, 3, 4'"),
            Self::BadPosition(token) => write!(f, "'{token}' is not a position"),
            Self::OutOfRange {
                position,
                phrase_len,
            } => write!(f, "position {position} is outside 1..={phrase_len}"),
            Self::OnSpace(position) => write!(f, "position {position} is a space"),
            Self::BadLength(token) => write!(f, "'{token}' is not a positive length"),
        }
    }
}

impl std::error::Error for ReplyError {}

/// Parse a reply to a letter guess
///
/// When `phrase_len` is known, positions beyond it are rejected.
///
/// # Errors
/// Returns `ReplyError` if the reply does not follow the grammar.
///
/// # Examples
/// ```
/// use hangman_entropy::core::GuessResponse;
/// use hangman_entropy::oracle::parse_letter_reply;
///
/// let response = parse_letter_reply("y, 3, 4", Some(5)).unwrap();
/// assert_eq!(response, GuessResponse::positive(vec![3, 4]).unwrap());
/// assert_eq!(parse_letter_reply("N", None).unwrap(), GuessResponse::Negative);
/// assert!(parse_letter_reply("Y", None).is_err());
/// ```
pub fn parse_letter_reply(
    input: &str,
    phrase_len: Option<usize>,
) -> Result<GuessResponse, ReplyError> {
    let mut tokens = input.split(',').map(str::trim);

    if !leading_yes(tokens.next())? {
        return Ok(GuessResponse::Negative);
    }

    let positions = tokens
        .filter(|t| !t.is_empty())
        .map(|t| parse_position(t, phrase_len))
        .collect::<Result<Vec<usize>, _>>()?;

    Positions::new(positions)
        .map(GuessResponse::Positive)
        .map_err(|_| ReplyError::MissingPositions)
}

/// Reject a letter response that lands on a known space
///
/// # Errors
/// Returns `ReplyError::OnSpace` with the first offending position.
///
/// # Examples
/// ```
/// use hangman_entropy::core::GuessResponse;
/// use hangman_entropy::oracle::{ReplyError, reject_spaces};
///
/// let response = GuessResponse::positive(vec![2, 6]).unwrap();
/// assert_eq!(reject_spaces(response, &[6]), Err(ReplyError::OnSpace(6)));
/// assert!(reject_spaces(GuessResponse::Negative, &[6]).is_ok());
/// ```
pub fn reject_spaces(
    response: GuessResponse,
    spaces: &[usize],
) -> Result<GuessResponse, ReplyError> {
    if let GuessResponse::Positive(positions) = &response
        && let Some(&position) = positions.as_slice().iter().find(|p| spaces.contains(p))
    {
        return Err(ReplyError::OnSpace(position));
    }
    Ok(response)
}

/// Parse a reply to a whole-phrase guess
///
/// # Errors
/// Returns `ReplyError` if the reply does not start with Y or N.
pub fn parse_phrase_reply(input: &str) -> Result<bool, ReplyError> {
    leading_yes(input.split(',').map(str::trim).next())
}

/// Parse a phrase length (a positive integer)
///
/// # Errors
/// Returns `ReplyError::BadLength` for anything else.
pub fn parse_length(input: &str) -> Result<usize, ReplyError> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(len) if len > 0 => Ok(len),
        _ => Err(ReplyError::BadLength(trimmed.to_string())),
    }
}

fn leading_yes(token: Option<&str>) -> Result<bool, ReplyError> {
    match token.map(str::to_uppercase).as_deref() {
        None | Some("") => Err(ReplyError::Empty),
        Some("Y") => Ok(true),
        Some("N") => Ok(false),
        Some(other) => Err(ReplyError::BadPrefix(other.to_string())),
    }
}

fn parse_position(token: &str, phrase_len: Option<usize>) -> Result<usize, ReplyError> {
    let position = token
        .parse::<usize>()
        .ok()
        .filter(|&p| p > 0)
        .ok_or_else(|| ReplyError::BadPosition(token.to_string()))?;

    match phrase_len {
        Some(len) if position > len => Err(ReplyError::OutOfRange {
            position,
            phrase_len: len,
        }),
        _ => Ok(position),
    }
}
