//! turncheck: evaluate the last exchange of a conversation against retrieved
//! context and print the report.

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::ConfigLoader;
use turncheck_eval::{load_contexts, load_conversation, Evaluator};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let (file_config, _) = ConfigLoader::new(args.config.clone())
        .load()
        .context("Failed to load configuration")?;
    let evaluator = Evaluator::new(file_config.to_eval_config())?;

    let conversation = load_conversation(&args.conversation)?;
    let contexts = load_contexts(&args.contexts)?;

    let report = evaluator
        .evaluate(&conversation, &contexts)
        .context("Evaluation failed")?;

    report
        .print_report()
        .context("Failed to render report")?;

    if let Some(path) = &args.output_file {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Report written to {}", path.display());
    }

    Ok(())
}
