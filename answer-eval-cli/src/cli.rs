//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use answer_eval_core::{ReferenceLengthPolicy, ScoringConfig};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "answer-eval", version, about = "Score generated answers with BLEU and ROUGE-L")]
pub struct Cli {
    /// Configuration file (layered over config/default and config/local)
    #[arg(short, long, global = true, env = "ANSWER_EVAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(flatten)]
    pub overrides: ScoringOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a JSON batch of id-keyed hypotheses and references
    Score {
        /// Path to a JSON file with `hypotheses` and `references` maps
        #[arg(short, long)]
        input: PathBuf,

        /// Also print per-item scores
        #[arg(long)]
        items: bool,
    },

    /// Score one hypothesis file against one reference file
    Files {
        /// Reference text file; lines are joined with spaces
        #[arg(short, long)]
        reference: PathBuf,

        /// Hypothesis text file; lines are joined with spaces
        #[arg(short = 'H', long)]
        hypothesis: PathBuf,
    },
}

/// Per-invocation overrides of the loaded scoring configuration.
#[derive(Debug, Default, Args)]
pub struct ScoringOverrides {
    /// Highest BLEU n-gram order
    #[arg(long, global = true)]
    pub max_order: Option<usize>,

    /// Effective reference length policy (shortest, closest, average)
    #[arg(long, global = true)]
    pub policy: Option<ReferenceLengthPolicy>,

    /// ROUGE-L recall weight
    #[arg(long, global = true)]
    pub beta: Option<f64>,

    /// Strip ASCII punctuation before counting
    #[arg(long, global = true)]
    pub strip_punctuation: bool,

    /// Keep original casing
    #[arg(long, global = true)]
    pub case_sensitive: bool,
}

impl ScoringOverrides {
    pub fn apply(&self, mut config: ScoringConfig) -> ScoringConfig {
        if let Some(max_order) = self.max_order {
            config.max_order = max_order;
        }
        if let Some(policy) = self.policy {
            config.length_policy = policy;
        }
        if let Some(beta) = self.beta {
            config.beta = beta;
        }
        if self.strip_punctuation {
            config.tokenizer.strip_punctuation = true;
        }
        if self.case_sensitive {
            config.tokenizer.lowercase = false;
        }
        config
    }
}
