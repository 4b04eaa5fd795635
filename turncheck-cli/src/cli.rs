//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Score a single-turn LLM response against retrieved context
#[derive(Parser, Debug)]
#[command(name = "turncheck")]
#[command(about = "Heuristic relevance, completeness and hallucination report for an LLM answer", long_about = None)]
#[command(version)]
pub struct Args {
    /// Conversation JSON: {"messages": [{"role", "content"}, ...]}
    #[arg(long, default_value = "conversation.json")]
    pub conversation: PathBuf,

    /// Context JSON: {"contexts": [{"text"}, ...]} or a bare array
    #[arg(long, default_value = "context_vectors.json")]
    pub contexts: PathBuf,

    /// Extra TOML config file, applied after discovered ones
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write the report JSON to this file
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
