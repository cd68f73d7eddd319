//! Solver tuning constants

/// Entropy (bits) at or below which a slot, or the whole phrase, counts as resolved
pub const CONFIDENCE_THRESHOLD: f64 = 0.075;

/// Guesses charged for a rejected whole-phrase guess
pub const PHRASE_PENALTY: usize = 3;

/// Candidates and letters listed per round in traces
pub const TRACE_DEPTH: usize = 10;

/// Knobs for a solving session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub confidence_threshold: f64,
    pub phrase_penalty: usize,
    pub trace_depth: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(confidence_threshold: f64) -> Self {
        Self {
            confidence_threshold,
            phrase_penalty: PHRASE_PENALTY,
            trace_depth: TRACE_DEPTH,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(CONFIDENCE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = SolverConfig::default();
        assert!((config.confidence_threshold - 0.075).abs() < f64::EPSILON);
        assert_eq!(config.phrase_penalty, 3);
        assert_eq!(config.trace_depth, 10);
    }
}
