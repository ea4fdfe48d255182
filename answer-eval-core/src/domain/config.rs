use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;

pub const DEFAULT_MAX_ORDER: usize = 4;
pub const DEFAULT_BETA: f64 = 1.2;

// ===== Tokenization =====

/// Text normalization applied before counting.
///
/// Defaults to lowercasing and whitespace splitting with punctuation kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    /// Remove every non-alphanumeric character from each token. Unicode
    /// aware, so curly quotes, dashes and `…` are removed along with ASCII
    /// punctuation.
    pub strip_punctuation: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_punctuation: false,
        }
    }
}

// ===== Brevity penalty =====

/// How a pair's effective reference length is chosen when it has several
/// references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceLengthPolicy {
    Shortest,
    #[default]
    Closest,
    Average,
}

impl ReferenceLengthPolicy {
    /// Effective reference length for a hypothesis of `hypothesis_length`
    /// tokens. Returns 0.0 for an empty slice.
    pub fn effective_length(&self, hypothesis_length: usize, reference_lengths: &[usize]) -> f64 {
        if reference_lengths.is_empty() {
            return 0.0;
        }

        match self {
            Self::Shortest => reference_lengths.iter().copied().min().unwrap_or(0) as f64,
            Self::Closest => {
                let mut best = reference_lengths[0];
                for &length in &reference_lengths[1..] {
                    let diff = length.abs_diff(hypothesis_length);
                    let best_diff = best.abs_diff(hypothesis_length);
                    if diff < best_diff || (diff == best_diff && length < best) {
                        best = length;
                    }
                }
                best as f64
            }
            Self::Average => {
                reference_lengths.iter().sum::<usize>() as f64 / reference_lengths.len() as f64
            }
        }
    }
}

impl std::fmt::Display for ReferenceLengthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shortest => write!(f, "shortest"),
            Self::Closest => write!(f, "closest"),
            Self::Average => write!(f, "average"),
        }
    }
}

impl std::str::FromStr for ReferenceLengthPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shortest" => Ok(Self::Shortest),
            "closest" => Ok(Self::Closest),
            "average" => Ok(Self::Average),
            other => Err(format!("unknown reference length policy: {}", other)),
        }
    }
}

// ===== Scoring =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ScoringConfig {
    /// Highest BLEU n-gram order; one score is reported per order.
    #[validate(range(min = 1, max = 9))]
    pub max_order: usize,
    /// ROUGE-L recall weight. Values above 1 favour recall.
    #[validate(range(exclusive_min = 0.0))]
    pub beta: f64,
    pub length_policy: ReferenceLengthPolicy,
    pub tokenizer: TokenizerConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
            beta: DEFAULT_BETA,
            length_policy: ReferenceLengthPolicy::default(),
            tokenizer: TokenizerConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Return the configuration if it passes validation.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}
