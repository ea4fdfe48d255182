use answer_eval_core::{Corpus, CorpusScorer, ReferenceLengthPolicy, Result, ScoringConfig};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::AddAssign;
use tracing::debug;

use crate::ngrams::{clipped_count, count_ngrams, max_reference_counts};
use crate::tokenizer::Tokenizer;

/// Numerator of the smoothing floor.
pub const TINY: f64 = 1e-15;
/// Denominator of the smoothing floor.
pub const SMALL: f64 = 1e-9;

/// Precision substituted for an order with no clipped matches, whether or
/// not the hypothesis has any n-grams of that order.
pub const SMOOTHING_FLOOR: f64 = TINY / SMALL;

/// Modified precision for one order, never exactly zero.
pub fn smoothed_precision(clipped: u64, total: u64) -> f64 {
    if clipped == 0 {
        SMOOTHING_FLOOR
    } else {
        clipped as f64 / total as f64
    }
}

/// `1` when the hypothesis is longer than the reference, `exp(1 - r/c)`
/// otherwise, and `0` for an empty hypothesis.
pub fn brevity_penalty(hypothesis_length: u64, reference_length: f64) -> f64 {
    if hypothesis_length == 0 {
        return 0.0;
    }

    let c = hypothesis_length as f64;
    if c > reference_length {
        1.0
    } else {
        (1.0 - reference_length / c).exp()
    }
}

/// Sufficient statistics for BLEU over one pair or a whole corpus.
///
/// Index `k` of `clipped`/`totals` holds order `k + 1`. Statistics add
/// element-wise, so corpora can be scored in pieces and recombined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BleuStats {
    pub clipped: Vec<u64>,
    pub totals: Vec<u64>,
    pub hypothesis_length: u64,
    pub reference_length: f64,
}

impl BleuStats {
    pub fn new(max_order: usize) -> Self {
        Self {
            clipped: vec![0; max_order],
            totals: vec![0; max_order],
            hypothesis_length: 0,
            reference_length: 0.0,
        }
    }
}

impl AddAssign<&BleuStats> for BleuStats {
    fn add_assign(&mut self, other: &BleuStats) {
        if self.clipped.len() < other.clipped.len() {
            self.clipped.resize(other.clipped.len(), 0);
        }
        if self.totals.len() < other.totals.len() {
            self.totals.resize(other.totals.len(), 0);
        }
        for (acc, value) in self.clipped.iter_mut().zip(&other.clipped) {
            *acc += value;
        }
        for (acc, value) in self.totals.iter_mut().zip(&other.totals) {
            *acc += value;
        }
        self.hypothesis_length += other.hypothesis_length;
        self.reference_length += other.reference_length;
    }
}

impl AddAssign for BleuStats {
    fn add_assign(&mut self, other: BleuStats) {
        *self += &other;
    }
}

impl Sum for BleuStats {
    fn sum<I: Iterator<Item = BleuStats>>(iter: I) -> Self {
        iter.fold(BleuStats::default(), |mut acc, stats| {
            acc += stats;
            acc
        })
    }
}

impl<'a> Sum<&'a BleuStats> for BleuStats {
    fn sum<I: Iterator<Item = &'a BleuStats>>(iter: I) -> Self {
        iter.fold(BleuStats::default(), |mut acc, stats| {
            acc += stats;
            acc
        })
    }
}

/// BLEU scores for orders `1..=max_order` with the values they were built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BleuBreakdown {
    /// `scores[n - 1]` is the cumulative BLEU-n score.
    pub scores: Vec<f64>,
    /// Smoothed modified precision per order.
    pub precisions: Vec<f64>,
    pub brevity_penalty: f64,
    /// Hypothesis to reference length ratio.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BleuOutput {
    pub scores: Vec<f64>,
    /// Per-pair scores in corpus order.
    pub item_scores: Vec<Vec<f64>>,
    pub precisions: Vec<f64>,
    pub brevity_penalty: f64,
    pub ratio: f64,
    pub hypothesis_length: u64,
    pub reference_length: f64,
}

#[derive(Debug, Clone)]
pub struct BleuCalculator {
    pub max_order: usize,
    pub policy: ReferenceLengthPolicy,
    pub tokenizer: Tokenizer,
}

impl BleuCalculator {
    pub fn new(max_order: usize) -> Self {
        Self {
            max_order,
            policy: ReferenceLengthPolicy::default(),
            tokenizer: Tokenizer::default(),
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            max_order: config.max_order,
            policy: config.length_policy,
            tokenizer: Tokenizer::new(config.tokenizer),
        }
    }

    pub fn with_policy(mut self, policy: ReferenceLengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Collect clipped counts and lengths for one hypothesis.
    pub fn pair_stats<S: AsRef<str>>(&self, hypothesis: &str, references: &[S]) -> BleuStats {
        let hyp_tokens = self.tokenizer.tokenize(hypothesis);
        let ref_tokens: Vec<Vec<String>> = references
            .iter()
            .map(|reference| self.tokenizer.tokenize(reference.as_ref()))
            .collect();

        let mut stats = BleuStats::new(self.max_order);
        for n in 1..=self.max_order {
            let hyp_counts = count_ngrams(&hyp_tokens, n);
            let ref_counts = max_reference_counts(ref_tokens.iter().map(Vec::as_slice), n);
            let (clipped, total) = clipped_count(&hyp_counts, &ref_counts);
            stats.clipped[n - 1] = clipped;
            stats.totals[n - 1] = total;
        }

        let ref_lengths: Vec<usize> = ref_tokens.iter().map(Vec::len).collect();
        stats.hypothesis_length = hyp_tokens.len() as u64;
        stats.reference_length = self.policy.effective_length(hyp_tokens.len(), &ref_lengths);
        stats
    }

    /// Reduce statistics to per-order scores.
    pub fn score_stats(&self, stats: &BleuStats) -> BleuBreakdown {
        let precisions: Vec<f64> = (0..self.max_order)
            .map(|k| {
                let clipped = stats.clipped.get(k).copied().unwrap_or(0);
                let total = stats.totals.get(k).copied().unwrap_or(0);
                smoothed_precision(clipped, total)
            })
            .collect();

        let brevity_penalty = brevity_penalty(stats.hypothesis_length, stats.reference_length);
        // An empty hypothesis side reports the bare floor instead of zero.
        let scale = if stats.hypothesis_length == 0 {
            1.0
        } else {
            brevity_penalty
        };

        let mut log_precision_sum = 0.0;
        let scores = precisions
            .iter()
            .enumerate()
            .map(|(k, precision)| {
                log_precision_sum += precision.ln();
                scale * (log_precision_sum / (k + 1) as f64).exp()
            })
            .collect();

        let ratio = (stats.hypothesis_length as f64 + TINY) / (stats.reference_length + SMALL);

        BleuBreakdown {
            scores,
            precisions,
            brevity_penalty,
            ratio,
        }
    }

    /// Score a single hypothesis against its references.
    pub fn sentence_bleu<S: AsRef<str>>(&self, hypothesis: &str, references: &[S]) -> BleuBreakdown {
        self.score_stats(&self.pair_stats(hypothesis, references))
    }
}

impl Default for BleuCalculator {
    fn default() -> Self {
        Self::new(4)
    }
}

impl CorpusScorer for BleuCalculator {
    type Output = BleuOutput;

    fn method(&self) -> &'static str {
        "Bleu"
    }

    fn compute(&self, corpus: Corpus) -> Result<Self::Output> {
        let mut totals = BleuStats::new(self.max_order);
        let mut item_scores = Vec::with_capacity(corpus.len());

        for pair in corpus.into_pairs() {
            let stats = self.pair_stats(&pair.hypothesis, &pair.references);
            item_scores.push(self.score_stats(&stats).scores);
            totals += &stats;
        }

        let breakdown = self.score_stats(&totals);
        debug!(
            items = item_scores.len(),
            clipped = ?totals.clipped,
            totals = ?totals.totals,
            hypothesis_length = totals.hypothesis_length,
            reference_length = totals.reference_length,
            ratio = breakdown.ratio,
            brevity_penalty = breakdown.brevity_penalty,
            policy = %self.policy,
            "BLEU corpus reduction"
        );

        Ok(BleuOutput {
            scores: breakdown.scores,
            item_scores,
            precisions: breakdown.precisions,
            brevity_penalty: breakdown.brevity_penalty,
            ratio: breakdown.ratio,
            hypothesis_length: totals.hypothesis_length,
            reference_length: totals.reference_length,
        })
    }
}
