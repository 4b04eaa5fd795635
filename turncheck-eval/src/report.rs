//! Evaluation report.
//!
//! The report is the single output of an evaluation, designed for JSON
//! serialization and console display.

use serde::{Deserialize, Serialize};

/// Opening banner printed above the report JSON.
pub const REPORT_HEADER: &str = "===== LLM EVALUATION REPORT =====";

/// Closing banner printed below the report JSON.
pub const REPORT_FOOTER: &str = "=================================";

/// Scores and estimates for one question/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// The question (second-to-last message)
    pub user_question: String,

    /// The model response (last message)
    pub llm_response: String,

    /// Best token overlap with any context passage, in [0, 1]
    pub relevance_score: f64,

    /// Fraction of the question's words found in the response, in [0, 1]
    pub completeness_score: f64,

    /// Whether relevance fell below the hallucination threshold
    pub hallucination_detected: bool,

    /// Time spent scoring, in milliseconds (2 decimals)
    pub latency_ms: f64,

    /// Token-count cost proxy in USD (5 decimals)
    pub cost_estimate_usd: f64,
}

impl EvaluationReport {
    /// Render the report as JSON with 4-space indentation.
    ///
    /// Non-ASCII characters are written as raw UTF-8 rather than `\uXXXX`
    /// escapes; both forms decode to the same JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Render the banner-framed block shown on the console.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        Ok(format!(
            "\n{}\n{}\n{}\n",
            REPORT_HEADER,
            self.to_json_pretty()?,
            REPORT_FOOTER
        ))
    }

    /// Print the banner-framed report to stdout.
    pub fn print_report(&self) -> Result<(), serde_json::Error> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Write the report JSON to a file.
    pub fn write_json(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = self
            .to_json_pretty()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Whether two reports agree on everything except latency.
    ///
    /// Latency is wall-clock dependent; every other field is a pure function
    /// of the inputs and configuration.
    pub fn same_scores(&self, other: &Self) -> bool {
        self.user_question == other.user_question
            && self.llm_response == other.llm_response
            && self.relevance_score.to_bits() == other.relevance_score.to_bits()
            && self.completeness_score.to_bits() == other.completeness_score.to_bits()
            && self.hallucination_detected == other.hallucination_detected
            && self.cost_estimate_usd.to_bits() == other.cost_estimate_usd.to_bits()
    }
}
