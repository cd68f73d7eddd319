//! Corpus loading utilities
//!
//! A corpus is line-oriented text, one `word count` pair per line separated
//! by whitespace. Words are uppercased; counts become the initial weights.

use crate::core::WordEntry;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for unreadable or malformed corpora
#[derive(Debug)]
pub enum CorpusError {
    Io(io::Error),
    EmptyLine { line: usize },
    MissingCount { line: usize },
    ExtraField { line: usize },
    InvalidCount { line: usize, value: String },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read corpus: {e}"),
            Self::EmptyLine { line } => write!(f, "line {line}: empty line"),
            Self::MissingCount { line } => write!(f, "line {line}: expected `word count`"),
            Self::ExtraField { line } => write!(f, "line {line}: more than two fields"),
            Self::InvalidCount { line, value } => {
                write!(f, "line {line}: '{value}' is not a non-negative integer count")
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CorpusError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse corpus text
///
/// Trailing whitespace at the end of the text is ignored; any other blank
/// line is an error.
///
/// # Errors
/// Returns `CorpusError` naming the first malformed line (1-based).
///
/// # Examples
/// ```
/// use hangman_entropy::corpus::parse_corpus;
///
/// let words = parse_corpus("hello 120\nworld 80\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "HELLO");
/// assert!(parse_corpus("hello many").is_err());
/// ```
pub fn parse_corpus(text: &str) -> Result<Vec<WordEntry>, CorpusError> {
    let text = text.trim_end();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.lines()
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

fn parse_line(line: usize, content: &str) -> Result<WordEntry, CorpusError> {
    let mut fields = content.split_whitespace();

    let word = fields.next().ok_or(CorpusError::EmptyLine { line })?;
    let count = fields.next().ok_or(CorpusError::MissingCount { line })?;
    if fields.next().is_some() {
        return Err(CorpusError::ExtraField { line });
    }

    let count = count
        .parse::<u64>()
        .map_err(|_| CorpusError::InvalidCount {
            line,
            value: count.to_string(),
        })?;

    Ok(WordEntry::new(word, count as f64))
}

/// Load a corpus from a file
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or a parse error
/// for the first malformed line.
///
/// # Examples
/// ```no_run
/// use hangman_entropy::corpus::load_corpus;
///
/// let words = load_corpus("data/word_freq.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, CorpusError> {
    let content = fs::read_to_string(path)?;
    parse_corpus(&content)
}

/// Convert embedded pairs to entries
#[must_use]
pub fn entries_from_slice(slice: &[(&str, u64)]) -> Vec<WordEntry> {
    slice
        .iter()
        .map(|&(word, count)| WordEntry::new(word, count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_uppercases() {
        let words = parse_corpus("the 500\nCat 10\n  dog\t7  \n").unwrap();
        let texts: Vec<&str> = words.iter().map(WordEntry::text).collect();
        assert_eq!(texts, vec!["THE", "CAT", "DOG"]);
        assert!((words[2].weight() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trailing_blank_lines_ignored() {
        let words = parse_corpus("cat 1\n\n\n").unwrap();
        assert_eq!(words.len(), 1);
        assert!(parse_corpus("").unwrap().is_empty());
    }

    #[test]
    fn interior_blank_line_is_error() {
        assert!(matches!(
            parse_corpus("cat 1\n\ndog 2"),
            Err(CorpusError::EmptyLine { line: 2 })
        ));
    }

    #[test]
    fn missing_and_extra_fields() {
        assert!(matches!(
            parse_corpus("cat 1\ndog"),
            Err(CorpusError::MissingCount { line: 2 })
        ));
        assert!(matches!(
            parse_corpus("cat 1 2"),
            Err(CorpusError::ExtraField { line: 1 })
        ));
    }

    #[test]
    fn invalid_counts() {
        assert!(matches!(
            parse_corpus("cat ten"),
            Err(CorpusError::InvalidCount { line: 1, .. })
        ));
        assert!(matches!(
            parse_corpus("cat -4"),
            Err(CorpusError::InvalidCount { line: 1, .. })
        ));
        assert!(matches!(
            parse_corpus("cat 1.5"),
            Err(CorpusError::InvalidCount { line: 1, .. })
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            load_corpus("/nonexistent/word_freq.txt"),
            Err(CorpusError::Io(_))
        ));
    }

    #[test]
    fn entries_from_slice_converts() {
        let words = entries_from_slice(&[("cat", 3), ("dog", 0)]);
        assert_eq!(words[0].text(), "CAT");
        assert!(words[1].weight().abs() < f64::EPSILON);
    }
}
