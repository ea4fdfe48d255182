//! Scoring configuration loading

use anyhow::{Context as _, Result};
use config::{Config as ConfigLoader, Environment, File};
use std::path::Path;

use answer_eval_core::ScoringConfig;

pub const ENV_PREFIX: &str = "ANSWER_EVAL";

/// Load the scoring configuration.
///
/// Sources, lowest precedence first: `config/default`, `config/local`, the
/// explicit `path` (required when given), then `ANSWER_EVAL_*` environment
/// variables with `__` separating nested keys (`ANSWER_EVAL_TOKENIZER__LOWERCASE`).
pub fn load(path: Option<&Path>) -> Result<ScoringConfig> {
    let mut builder = ConfigLoader::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name("config/local").required(false));

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to load scoring configuration")?;

    let scoring: ScoringConfig = config
        .try_deserialize()
        .context("Failed to parse scoring configuration")?;

    tracing::debug!(?scoring, "Configuration loaded");
    Ok(scoring)
}
