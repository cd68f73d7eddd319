//! Per-slot candidate sets
//!
//! A `CandidateSet` holds every corpus word still consistent with the
//! responses seen so far for one slot. Filtering never edits entries; it
//! consumes the old sequence and collects a new one.

use super::entropy::entropy;
use crate::core::{EngineError, WordEntry};

/// Weighted candidates for one word slot
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    slot: usize,
    length: usize,
    entries: Vec<WordEntry>,
}

impl CandidateSet {
    /// Select every corpus entry whose length equals the slot length
    ///
    /// # Examples
    /// ```
    /// use hangman_entropy::core::WordEntry;
    /// use hangman_entropy::solver::CandidateSet;
    ///
    /// let corpus = vec![
    ///     WordEntry::new("cat", 10.0),
    ///     WordEntry::new("horse", 4.0),
    ///     WordEntry::new("dog", 6.0),
    /// ];
    /// let set = CandidateSet::for_slot(0, 3, &corpus);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn for_slot(slot: usize, length: usize, corpus: &[WordEntry]) -> Self {
        let entries = corpus.iter().filter(|e| e.len() == length).cloned().collect();
        Self::from_entries(slot, length, entries)
    }

    /// Wrap entries that already have the slot length
    #[must_use]
    pub fn from_entries(slot: usize, length: usize, entries: Vec<WordEntry>) -> Self {
        debug_assert!(entries.iter().all(|e| e.len() == length));
        Self {
            slot,
            length,
            entries,
        }
    }

    #[inline]
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Character length shared by every candidate
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(WordEntry::weight).sum()
    }

    /// Rescale weights so they sum to 1
    ///
    /// # Errors
    /// Returns `EngineError::ExhaustedCandidates` if the total weight is 0.
    pub fn normalize(&mut self) -> Result<(), EngineError> {
        let total = self.checked_total()?;
        for entry in &mut self.entries {
            entry.scale(total);
        }
        Ok(())
    }

    /// Entropy of the normalized weights, in bits
    ///
    /// # Errors
    /// Returns `EngineError::ExhaustedCandidates` if the total weight is 0.
    pub fn entropy(&self) -> Result<f64, EngineError> {
        let total = self.checked_total()?;
        let probs: Vec<f64> = self.entries.iter().map(|e| e.weight() / total).collect();
        entropy(&probs)
    }

    /// Collapse to the single highest-weight entry when entropy is at or below
    /// `threshold`
    ///
    /// Returns `true` if entries were dropped. Ties keep the earliest entry.
    ///
    /// # Errors
    /// Returns `EngineError::ExhaustedCandidates` if the total weight is 0.
    pub fn collapse_if_confident(&mut self, threshold: f64) -> Result<bool, EngineError> {
        if self.entropy()? > threshold || self.entries.len() <= 1 {
            return Ok(false);
        }

        let best = self.best_index().unwrap_or(0);
        let keep = std::mem::take(&mut self.entries).swap_remove(best);
        self.entries = vec![keep];
        Ok(true)
    }

    /// Highest-weight candidate (earliest on ties)
    #[must_use]
    pub fn best(&self) -> Option<&WordEntry> {
        self.best_index().map(|i| &self.entries[i])
    }

    /// Up to `n` candidates in descending weight order
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&WordEntry> {
        let mut sorted: Vec<&WordEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
        sorted.truncate(n);
        sorted
    }

    /// Keep only entries matching the predicate
    pub fn retain_by<F>(&mut self, keep: F)
    where
        F: Fn(&WordEntry) -> bool,
    {
        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .filter(|e| keep(e))
            .collect();
    }

    fn best_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, e)| match best {
                Some((_, w)) if w >= e.weight() => best,
                _ => Some((i, e.weight())),
            })
            .map(|(i, _)| i)
    }

    fn checked_total(&self) -> Result<f64, EngineError> {
        let total = self.total_weight();
        if total > 0.0 {
            Ok(total)
        } else {
            Err(EngineError::ExhaustedCandidates { slot: self.slot })
        }
    }
}
