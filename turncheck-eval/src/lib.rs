//! # Turncheck Eval
//!
//! Heuristic evaluation of single-turn LLM responses against retrieved context.
//!
//! ## Overview
//!
//! Given a user question, a model answer, and a set of reference passages,
//! `turncheck-eval` computes:
//!
//! - **Relevance**: best token-set Jaccard overlap between the answer and any passage
//! - **Completeness**: fraction of the question's distinct words found in the answer
//! - **Hallucination flag**: relevance below a fixed threshold (default 0.15)
//! - **Latency / cost**: scoring time in milliseconds and a per-token cost proxy
//!
//! All scores are lexical. There is no embedding model and no real tokenizer;
//! the numbers are fast, deterministic, and explainable, and they miss
//! paraphrases.
//!
//! ## Architecture
//!
//! ```text
//! input (ConversationRecord, ContextPassage)
//!     ↓
//! evaluator ──→ scorer (similarity, relevance, completeness)
//!     │    ──→ hallucination (threshold on relevance)
//!     │    ──→ estimate (latency via Clock, cost proxy)
//!     ↓
//! report (EvaluationReport)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use turncheck_eval::{ContextPassage, ConversationRecord, evaluate};
//!
//! let conversation = ConversationRecord::single_turn(
//!     "What is the capital of France",
//!     "Bananas are yellow fruits",
//! );
//! let contexts = vec![ContextPassage::new(
//!     "Paris is the capital and largest city of France.",
//! )];
//!
//! let report = evaluate(&conversation, &contexts)?;
//! assert!(report.hallucination_detected);
//! # Ok::<(), turncheck_eval::EvalError>(())
//! ```
//!
//! ## Loading Inputs
//!
//! ```no_run
//! use std::path::Path;
//! use turncheck_eval::{load_contexts, load_conversation, Evaluator, EvalConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let conversation = load_conversation(Path::new("conversation.json"))?;
//! let contexts = load_contexts(Path::new("context_vectors.json"))?;
//!
//! let report = Evaluator::new(EvalConfig::default())?.evaluate(&conversation, &contexts)?;
//! report.print_report()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod estimate;
pub mod evaluator;
pub mod hallucination;
pub mod input;
pub mod report;
pub mod scorer;

// Re-export public API
pub use config::EvalConfig;
pub use estimate::{
    estimate_cost, estimate_cost_with_rate, estimate_latency, Clock, ManualClock, SystemClock,
    DEFAULT_COST_PER_TOKEN_USD,
};
pub use evaluator::{evaluate, EvalError, Evaluator};
pub use hallucination::{
    detect_hallucination, HallucinationDetector, DEFAULT_HALLUCINATION_THRESHOLD,
};
pub use input::{
    contexts_from_str, conversation_from_str, load_contexts, load_conversation, ContextPassage,
    ConversationRecord, InputError, Message,
};
pub use report::{EvaluationReport, REPORT_FOOTER, REPORT_HEADER};
pub use scorer::{completeness, relevance, similarity, tokenize, Jaccard, KeywordCoverage, Scorer};
