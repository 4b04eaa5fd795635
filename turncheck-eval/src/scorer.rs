//! Lexical scoring metrics.
//!
//! Provides the [`Scorer`] trait, the token-set [`Jaccard`] similarity and the
//! question-recall [`KeywordCoverage`] metric, plus the free functions the
//! evaluator builds on: [`similarity`], [`relevance`] and [`completeness`].
//!
//! All metrics work on the same token model: the text is lower-cased, split on
//! whitespace, and collapsed into a set. Punctuation is kept, so `"france."`
//! and `"france"` are different tokens.

use std::collections::HashSet;

/// Trait for lexical scorers.
///
/// A scorer compares a predicted text against a reference text
/// and returns a score between 0.0 and 1.0.
///
/// # Example
///
/// ```
/// use turncheck_eval::Scorer;
///
/// struct LengthRatio;
///
/// impl Scorer for LengthRatio {
///     fn name(&self) -> &str {
///         "length_ratio"
///     }
///
///     fn score(&self, predicted: &str, reference: &str) -> f64 {
///         let pred_len = predicted.chars().count() as f64;
///         let ref_len = reference.chars().count() as f64;
///         if ref_len == 0.0 { 1.0 } else { (pred_len / ref_len).min(1.0) }
///     }
/// }
///
/// assert_eq!(LengthRatio.score("abc", "abcdef"), 0.5);
/// ```
pub trait Scorer: Send + Sync {
    /// The name of this scorer (used in logs).
    fn name(&self) -> &str;

    /// Score the predicted text against the reference.
    ///
    /// Returns a value between 0.0 (no match) and 1.0 (perfect match).
    fn score(&self, predicted: &str, reference: &str) -> f64;
}

/// Token-set Jaccard similarity.
///
/// `|A ∩ B| / |A ∪ B|` over the lower-cased whitespace tokens of both texts.
/// Symmetric; returns 0.0 when either side has no tokens.
///
/// # Example
///
/// ```
/// use turncheck_eval::{Jaccard, Scorer};
///
/// assert_eq!(Jaccard.score("Paris is big", "paris IS big"), 1.0);
/// assert_eq!(Jaccard.score("red apple", "green pear"), 0.0);
/// assert_eq!(Jaccard.score("", "anything"), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Jaccard;

impl Scorer for Jaccard {
    fn name(&self) -> &str {
        "jaccard"
    }

    fn score(&self, predicted: &str, reference: &str) -> f64 {
        let a = tokenize(predicted);
        let b = tokenize(reference);

        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let intersection = a.intersection(&b).count();
        let union = a.union(&b).count();
        intersection as f64 / union as f64
    }
}

/// Keyword coverage of a reference question.
///
/// Returns the fraction of the reference's distinct tokens that also appear in
/// the predicted text. A reference with no tokens has nothing to cover and
/// scores 1.0.
///
/// # Example
///
/// ```
/// use turncheck_eval::{KeywordCoverage, Scorer};
///
/// assert_eq!(KeywordCoverage.score("paris is nice", "is paris big"), 2.0 / 3.0);
/// assert_eq!(KeywordCoverage.score("whatever", ""), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCoverage;

impl Scorer for KeywordCoverage {
    fn name(&self) -> &str {
        "keyword_coverage"
    }

    fn score(&self, predicted: &str, reference: &str) -> f64 {
        let reference_tokens = tokenize(reference);
        if reference_tokens.is_empty() {
            return 1.0;
        }

        let predicted_tokens = tokenize(predicted);
        let covered = reference_tokens.intersection(&predicted_tokens).count();
        covered as f64 / reference_tokens.len() as f64
    }
}

/// Split text into its set of lower-cased whitespace tokens.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity between two texts.
pub fn similarity(a: &str, b: &str) -> f64 {
    Jaccard.score(a, b)
}

/// Best similarity between a response and any one of the context passages.
///
/// Returns 0.0 when there are no passages.
pub fn relevance<S: AsRef<str>>(response: &str, contexts: &[S]) -> f64 {
    contexts
        .iter()
        .map(|ctx| similarity(response, ctx.as_ref()))
        .fold(0.0, f64::max)
}

/// Fraction of the question's distinct words that reappear in the response.
pub fn completeness(response: &str, question: &str) -> f64 {
    KeywordCoverage.score(response, question)
}
