//! Evaluate Demo Example
//!
//! Scores the sample conversation in `demos/` against its context passages
//! and prints the banner-framed report.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run -p turncheck-eval --example evaluate_demo
//! ```

use std::path::Path;
use turncheck_eval::{load_contexts, load_conversation, EvalConfig, Evaluator};

const DEMOS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let demos = Path::new(DEMOS_DIR);
    let conversation = load_conversation(&demos.join("conversation.json"))?;
    let contexts = load_contexts(&demos.join("context_vectors.json"))?;

    let evaluator = Evaluator::new(EvalConfig::default())?;
    let report = evaluator.evaluate(&conversation, &contexts)?;
    report.print_report()?;

    if report.hallucination_detected {
        println!("Response is not grounded in the supplied passages");
    } else {
        println!(
            "Response is grounded (relevance {:.2} across {} passages)",
            report.relevance_score,
            contexts.len()
        );
    }

    Ok(())
}
