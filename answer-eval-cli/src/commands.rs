//! Command dispatch

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use answer_eval_core::EvaluationBatch;
use answer_eval_metrics::Scorer;

use crate::cli::{Cli, Command};
use crate::config;
use crate::output::OutputWriter;

pub fn run(cli: Cli) -> Result<()> {
    let loaded = config::load(cli.config.as_deref())?;
    let scorer = Scorer::new(cli.overrides.apply(loaded)).context("Invalid scoring configuration")?;
    let output = OutputWriter::new(cli.output, cli.no_color);

    match cli.command {
        Command::Score { input, items } => {
            let batch = read_batch(&input)?;
            tracing::info!(path = %input.display(), items = batch.len(), "Scoring batch");
            let report = scorer.evaluate(batch)?;
            output.write(&report, items)
        }
        Command::Files {
            reference,
            hypothesis,
        } => {
            let batch = read_text_pair(&reference, &hypothesis)?;
            let report = scorer.evaluate(batch)?;
            output.write(&report, false)
        }
    }
}

pub fn read_batch(path: &Path) -> Result<EvaluationBatch> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch from {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse batch from {:?}", path))
}

pub fn read_text_pair(reference: &Path, hypothesis: &Path) -> Result<EvaluationBatch> {
    let reference_text = fs::read_to_string(reference)
        .with_context(|| format!("Failed to read reference from {:?}", reference))?;
    let hypothesis_text = fs::read_to_string(hypothesis)
        .with_context(|| format!("Failed to read hypothesis from {:?}", hypothesis))?;

    Ok(EvaluationBatch::single(
        reference_text.lines(),
        hypothesis_text.lines(),
    ))
}
