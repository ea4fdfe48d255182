use answer_eval_core::{Corpus, CorpusScorer, Result, ScoringConfig, DEFAULT_BETA};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::ngrams::lcs_length;
use crate::tokenizer::Tokenizer;

/// LCS statistics of a hypothesis against one reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LcsMatch {
    pub lcs_length: usize,
    pub precision: f64,
    pub recall: f64,
    pub f_measure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RougeOutput {
    /// Mean of the per-item scores.
    pub score: f64,
    pub item_scores: BTreeMap<String, f64>,
}

/// Weighted F-measure; zero when the denominator vanishes.
pub fn f_measure(precision: f64, recall: f64, beta: f64) -> f64 {
    let beta_sq = beta * beta;
    let denominator = recall + beta_sq * precision;
    if denominator == 0.0 {
        0.0
    } else {
        ((1.0 + beta_sq) * recall * precision) / denominator
    }
}

/// ROUGE-L: longest-common-subsequence F-measure, best reference wins.
#[derive(Debug, Clone)]
pub struct RougeCalculator {
    pub beta: f64,
    pub tokenizer: Tokenizer,
}

impl RougeCalculator {
    pub fn new(beta: f64) -> Self {
        Self {
            beta,
            tokenizer: Tokenizer::default(),
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            beta: config.beta,
            tokenizer: Tokenizer::new(config.tokenizer),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn lcs_match(&self, hypothesis: &[String], reference: &[String]) -> LcsMatch {
        if hypothesis.is_empty() || reference.is_empty() {
            return LcsMatch {
                lcs_length: 0,
                precision: 0.0,
                recall: 0.0,
                f_measure: 0.0,
            };
        }

        let lcs = lcs_length(hypothesis, reference);
        let precision = lcs as f64 / hypothesis.len() as f64;
        let recall = lcs as f64 / reference.len() as f64;

        LcsMatch {
            lcs_length: lcs,
            precision,
            recall,
            f_measure: f_measure(precision, recall, self.beta),
        }
    }

    /// Highest F-measure of `hypothesis` over `references`; 0.0 with no references.
    pub fn score_pair<S: AsRef<str>>(&self, hypothesis: &str, references: &[S]) -> f64 {
        let hyp_tokens = self.tokenizer.tokenize(hypothesis);

        references
            .iter()
            .map(|reference| {
                let ref_tokens = self.tokenizer.tokenize(reference.as_ref());
                self.lcs_match(&hyp_tokens, &ref_tokens).f_measure
            })
            .fold(0.0, f64::max)
    }
}

impl Default for RougeCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_BETA)
    }
}

impl CorpusScorer for RougeCalculator {
    type Output = RougeOutput;

    fn method(&self) -> &'static str {
        "Rouge"
    }

    fn compute(&self, corpus: Corpus) -> Result<Self::Output> {
        let count = corpus.len();
        let mut sum = 0.0;
        let mut item_scores = BTreeMap::new();

        for pair in corpus.into_pairs() {
            let score = self.score_pair(&pair.hypothesis, &pair.references);
            sum += score;
            item_scores.insert(pair.id, score);
        }

        let score = if count == 0 { 0.0 } else { sum / count as f64 };
        debug!(items = count, beta = self.beta, score, "ROUGE-L corpus reduction");

        Ok(RougeOutput { score, item_scores })
    }
}
