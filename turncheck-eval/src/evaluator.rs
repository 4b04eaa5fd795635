//! Evaluation orchestration.
//!
//! The [`Evaluator`] pulls the question and response out of a conversation,
//! runs every scorer against the context passages, times the scoring with its
//! [`Clock`], and assembles the [`EvaluationReport`].

use crate::config::EvalConfig;
use crate::estimate::{estimate_cost_with_rate, estimate_latency, Clock, SystemClock};
use crate::hallucination::HallucinationDetector;
use crate::input::{ContextPassage, ConversationRecord};
use crate::report::EvaluationReport;
use crate::scorer::{completeness, relevance};
use thiserror::Error;

/// Errors that can occur during evaluation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// Conversation lacks a question/response pair
    #[error("Conversation has {0} message(s), need at least 2")]
    TooFewMessages(usize),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Scores single-turn responses against retrieved context.
///
/// Evaluation is a pure computation over its inputs apart from the clock
/// readings, so one evaluator can be shared freely across threads.
///
/// # Example
///
/// ```
/// use turncheck_eval::{ContextPassage, ConversationRecord, EvalConfig, Evaluator};
///
/// let evaluator = Evaluator::new(EvalConfig::default())?;
/// let conversation = ConversationRecord::single_turn(
///     "What is the capital of France",
///     "The capital of France is Paris",
/// );
/// let contexts = vec![ContextPassage::new(
///     "Paris is the capital and largest city of France.",
/// )];
///
/// let report = evaluator.evaluate(&conversation, &contexts)?;
/// assert_eq!(report.relevance_score, 0.5);
/// assert!(!report.hallucination_detected);
/// # Ok::<(), turncheck_eval::EvalError>(())
/// ```
pub struct Evaluator {
    config: EvalConfig,
    detector: HallucinationDetector,
    clock: Box<dyn Clock>,
}

impl Evaluator {
    /// Create an evaluator timed by the system clock.
    ///
    /// Fails with [`EvalError::InvalidConfig`] if the configuration does not
    /// pass [`EvalConfig::validate`].
    pub fn new(config: EvalConfig) -> Result<Self, EvalError> {
        Self::with_clock(config, SystemClock)
    }

    /// Create an evaluator timed by a custom clock.
    ///
    /// Fails with [`EvalError::InvalidConfig`] if the configuration does not
    /// pass [`EvalConfig::validate`].
    pub fn with_clock(
        config: EvalConfig,
        clock: impl Clock + 'static,
    ) -> Result<Self, EvalError> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: EvalConfig, clock: impl Clock + 'static) -> Self {
        Self {
            detector: HallucinationDetector::new(config.hallucination_threshold),
            config,
            clock: Box::new(clock),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate the last exchange of `conversation` against `contexts`.
    ///
    /// Fails only when the conversation has fewer than two messages.
    pub fn evaluate(
        &self,
        conversation: &ConversationRecord,
        contexts: &[ContextPassage],
    ) -> Result<EvaluationReport, EvalError> {
        let (user_question, llm_response) = conversation.last_exchange()?;
        let context_texts: Vec<&str> = contexts.iter().map(|c| c.text.as_str()).collect();

        if context_texts.is_empty() {
            log::warn!("No context passages supplied; relevance will be 0.0");
        }

        let start = self.clock.now();

        let relevance_score = relevance(llm_response, &context_texts);
        let completeness_score = completeness(llm_response, user_question);
        let hallucination_detected = self.detector.is_flagged(relevance_score);

        let end = self.clock.now();

        let latency_ms = estimate_latency(start, end);
        let cost_estimate_usd =
            estimate_cost_with_rate(llm_response, self.config.cost_per_token_usd);

        log::debug!(
            "relevance={:.3} completeness={:.3} hallucination={} over {} passages",
            relevance_score,
            completeness_score,
            hallucination_detected,
            context_texts.len()
        );

        Ok(EvaluationReport {
            user_question: user_question.to_string(),
            llm_response: llm_response.to_string(),
            relevance_score,
            completeness_score,
            hallucination_detected,
            latency_ms,
            cost_estimate_usd,
        })
    }
}

impl Default for Evaluator {
    /// Default configuration, system clock. The defaults always validate.
    fn default() -> Self {
        Self::build(EvalConfig::default(), SystemClock)
    }
}

/// Evaluate with the default configuration and system clock.
pub fn evaluate(
    conversation: &ConversationRecord,
    contexts: &[ContextPassage],
) -> Result<EvaluationReport, EvalError> {
    Evaluator::default().evaluate(conversation, contexts)
}
