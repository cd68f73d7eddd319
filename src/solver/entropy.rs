//! Shannon entropy over candidate weights
//!
//! Slots are treated as independent, so the joint entropy of a phrase is the
//! sum of the per-slot entropies rather than a true joint computation.

use super::CandidateSet;
use crate::core::EngineError;

/// Shannon entropy of a weight distribution, in bits
///
/// H = Σ p * log₂(1/p), over entries with p > 0
///
/// Never negative zero: a certain outcome yields `+0.0`.
/// Weights are used as given; callers normalize first.
///
/// # Errors
/// Returns `EngineError::EmptyDistribution` for an empty slice.
///
/// # Examples
/// ```
/// use hangman_entropy::solver::entropy::entropy;
///
/// let h = entropy(&[0.25, 0.25, 0.25, 0.25]).unwrap();
/// assert!((h - 2.0).abs() < 1e-12);
/// assert!(entropy(&[1.0]).unwrap().abs() < 1e-12);
/// assert!(entropy(&[]).is_err());
/// ```
pub fn entropy(weights: &[f64]) -> Result<f64, EngineError> {
    if weights.is_empty() {
        return Err(EngineError::EmptyDistribution);
    }

    Ok(weights
        .iter()
        .filter(|&&p| p > 0.0)
        .fold(0.0, |h, &p| h + p * (1.0 / p).log2()))
}

/// Sum of the normalized entropies of every slot
///
/// # Errors
/// Returns `EngineError::ExhaustedCandidates` if any slot has no weight.
pub fn joint_entropy(sets: &[CandidateSet]) -> Result<f64, EngineError> {
    sets.iter().map(CandidateSet::entropy).sum()
}
