//! Plain-text trace log

use super::TraceSink;
use crate::solver::{Outcome, Round};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const SEPARATOR: &str = "----------------------------------";

/// Appends a human-readable record of each round to a writer
pub struct FileTrace<W: Write> {
    out: W,
    depth: usize,
}

impl FileTrace<BufWriter<File>> {
    /// Create (truncating) a log file
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P, depth: usize) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?), depth))
    }
}

impl<W: Write> FileTrace<W> {
    /// Trace into any writer, listing up to `depth` candidates and letters
    pub fn new(out: W, depth: usize) -> Self {
        Self { out, depth }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for FileTrace<W> {
    fn round(&mut self, round: &Round) -> io::Result<()> {
        writeln!(self.out, "{SEPARATOR}")?;
        let last = round
            .last_guess
            .as_ref()
            .map(|g| format!("{} -> {}", g.query, g.reply))
            .unwrap_or_default();
        writeln!(
            self.out,
            "AFTER GUESS #{} ({last}): {}",
            round.guesses_used, round.phrase
        )?;

        for slot in &round.slots {
            let top: Vec<String> = slot
                .top
                .iter()
                .take(self.depth)
                .map(|(word, weight)| format!("({word}, {weight:.6})"))
                .collect();
            writeln!(
                self.out,
                "Candidates for word {} ({} left{}): [{}]",
                slot.index + 1,
                slot.remaining,
                if slot.collapsed { ", collapsed" } else { "" },
                top.join(", ")
            )?;
            writeln!(self.out, "entropy for word {}: {:.6}", slot.index + 1, slot.entropy)?;
        }

        writeln!(self.out, "Joint entropy: {:.6}", round.joint_entropy)?;
        let letters: Vec<String> = round
            .ranking
            .iter()
            .take(self.depth)
            .map(ToString::to_string)
            .collect();
        writeln!(
            self.out,
            "{} highest-ranked letters: [{}]",
            letters.len(),
            letters.join(", ")
        )?;
        Ok(())
    }

    fn finish(&mut self, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.out, "{SEPARATOR}")?;
        let last = outcome
            .records
            .last()
            .map(|g| format!("{} -> {}", g.query, g.reply))
            .unwrap_or_default();
        writeln!(
            self.out,
            "AFTER GUESS #{} ({last}): {}",
            outcome.guesses_used, outcome.phrase
        )?;
        writeln!(
            self.out,
            "Resolved by {:?} after {} rounds",
            outcome.resolution, outcome.rounds
        )?;
        self.out.flush()
    }
}
