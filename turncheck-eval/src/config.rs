//! Evaluation configuration.

use crate::estimate::DEFAULT_COST_PER_TOKEN_USD;
use crate::evaluator::EvalError;
use crate::hallucination::DEFAULT_HALLUCINATION_THRESHOLD;

/// Tunable constants for an evaluation run.
///
/// Both defaults are uncalibrated heuristics; override them when evaluating
/// against a real dataset or pricing model.
///
/// # Example
///
/// ```
/// use turncheck_eval::EvalConfig;
///
/// let config = EvalConfig::new()
///     .with_hallucination_threshold(0.2)
///     .with_cost_per_token_usd(0.000002);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.hallucination_threshold, 0.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct EvalConfig {
    /// Relevance below which a response is flagged as a possible
    /// hallucination (default: 0.15)
    pub hallucination_threshold: f64,

    /// USD charged per whitespace token by the cost proxy (default: 0.00001)
    pub cost_per_token_usd: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            hallucination_threshold: DEFAULT_HALLUCINATION_THRESHOLD,
            cost_per_token_usd: DEFAULT_COST_PER_TOKEN_USD,
        }
    }
}

impl EvalConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hallucination threshold.
    #[must_use]
    pub fn with_hallucination_threshold(mut self, threshold: f64) -> Self {
        self.hallucination_threshold = threshold;
        self
    }

    /// Set the per-token cost rate.
    #[must_use]
    pub fn with_cost_per_token_usd(mut self, rate: f64) -> Self {
        self.cost_per_token_usd = rate;
        self
    }

    /// Check that both values are usable.
    pub fn validate(&self) -> Result<(), EvalError> {
        if !self.hallucination_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.hallucination_threshold)
        {
            return Err(EvalError::InvalidConfig(format!(
                "hallucination_threshold ({}) must be between 0.0 and 1.0",
                self.hallucination_threshold
            )));
        }

        if !self.cost_per_token_usd.is_finite() || self.cost_per_token_usd < 0.0 {
            return Err(EvalError::InvalidConfig(format!(
                "cost_per_token_usd ({}) must be a non-negative number",
                self.cost_per_token_usd
            )));
        }

        Ok(())
    }
}
