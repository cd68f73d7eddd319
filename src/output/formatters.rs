//! Formatting utilities for terminal output

use crate::core::GuessResponse;
use crate::solver::{GuessRecord, Reply};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 12.0; // Roughly log2 of a large slot
    create_progress_bar(entropy, max_entropy, width)
}

/// One-line description of a guess and its answer
#[must_use]
pub fn describe_guess(record: &GuessRecord) -> String {
    let answer = match &record.reply {
        Reply::Letter(GuessResponse::Negative) | Reply::Phrase(false) => "no".to_string(),
        Reply::Phrase(true) => "yes".to_string(),
        Reply::Letter(GuessResponse::Positive(positions)) => {
            let list: Vec<String> = positions.as_slice().iter().map(ToString::to_string).collect();
            format!("at {}", list.join(", "))
        }
    };
    format!("#{} {} → {answer}", record.number, record.query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Query;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_clamped() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn describes_guesses() {
        let hit = GuessRecord {
            number: 3,
            query: Query::Letter('L'),
            reply: Reply::Letter(GuessResponse::positive(vec![3, 4]).unwrap()),
        };
        assert_eq!(describe_guess(&hit), "#3 L → at 3, 4");

        let miss = GuessRecord {
            number: 1,
            query: Query::Letter(' '),
            reply: Reply::Letter(GuessResponse::Negative),
        };
        assert_eq!(describe_guess(&miss), "#1 space → no");

        let phrase = GuessRecord {
            number: 9,
            query: Query::Phrase("CAT".into()),
            reply: Reply::Phrase(true),
        };
        assert_eq!(describe_guess(&phrase), "#9 CAT → yes");
    }
}
