//! Hallucination flagging.
//!
//! The detector is a lexical proxy, not a fact check: it flags a response
//! whose best overlap with the supplied passages falls below a threshold. It
//! under-flags fluent claims that reuse context vocabulary and over-flags
//! correct answers phrased in different words.

use crate::scorer::relevance;

/// Relevance below which a response is flagged.
///
/// Not calibrated against any dataset; tune it through
/// [`EvalConfig`](crate::EvalConfig) for real workloads.
pub const DEFAULT_HALLUCINATION_THRESHOLD: f64 = 0.15;

/// Thresholds relevance into a boolean hallucination flag.
///
/// # Example
///
/// ```
/// use turncheck_eval::HallucinationDetector;
///
/// let detector = HallucinationDetector::default();
/// let contexts = ["Paris is the capital and largest city of France."];
///
/// assert!(!detector.detect("The capital of France is Paris", &contexts));
/// assert!(detector.detect("Bananas are yellow fruits", &contexts));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HallucinationDetector {
    threshold: f64,
}

impl Default for HallucinationDetector {
    fn default() -> Self {
        Self::new(DEFAULT_HALLUCINATION_THRESHOLD)
    }
}

impl HallucinationDetector {
    /// Create a detector with the given relevance threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The relevance threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether an already-computed relevance score is below the threshold.
    pub fn is_flagged(&self, relevance_score: f64) -> bool {
        relevance_score < self.threshold
    }

    /// Flag the response if its relevance to the contexts is below the threshold.
    pub fn detect<S: AsRef<str>>(&self, response: &str, contexts: &[S]) -> bool {
        self.is_flagged(relevance(response, contexts))
    }
}

/// Flag a response using the default threshold.
pub fn detect_hallucination<S: AsRef<str>>(response: &str, contexts: &[S]) -> bool {
    HallucinationDetector::default().detect(response, contexts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_threshold() {
        assert_eq!(
            HallucinationDetector::default().threshold(),
            DEFAULT_HALLUCINATION_THRESHOLD
        );
    }

    #[rstest]
    #[case::well_below(0.0, true)]
    #[case::just_below(0.149, true)]
    #[case::at_threshold(0.15, false)]
    #[case::above(0.5, false)]
    fn test_is_flagged(#[case] score: f64, #[case] flagged: bool) {
        assert_eq!(HallucinationDetector::default().is_flagged(score), flagged);
    }

    #[test]
    fn test_no_contexts_always_flagged() {
        let contexts: Vec<String> = vec![];
        assert!(detect_hallucination("The capital of France is Paris", &contexts));
        assert!(detect_hallucination("", &contexts));
    }

    #[test]
    fn test_detect_matches_relevance() {
        let contexts = ["a b c d", "x y"];
        for response in ["a", "a b", "x y z", "q"] {
            assert_eq!(
                detect_hallucination(response, &contexts),
                relevance(response, &contexts) < DEFAULT_HALLUCINATION_THRESHOLD
            );
        }
    }

    #[test]
    fn test_custom_threshold() {
        // relevance("a", ["a b c d"]) == 0.25
        let contexts = ["a b c d"];
        assert!(!HallucinationDetector::new(0.2).detect("a", &contexts));
        assert!(HallucinationDetector::new(0.3).detect("a", &contexts));
        assert!(!HallucinationDetector::new(0.0).detect("zzz", &contexts));
    }
}
