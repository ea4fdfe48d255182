use answer_eval_core::{
    bleu_metric_name, CorpusScorer, EvaluationBatch, EvaluationReport, ItemScores, MetricScores,
    Result, ScoringConfig, ROUGE_L,
};
use tracing::{info, instrument};

use crate::calculators::{BleuCalculator, RougeCalculator};

/// Runs BLEU and ROUGE-L over a batch and flattens the results into
/// `Bleu_1..Bleu_N` and `ROUGE_L`.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScoringConfig,
    bleu: BleuCalculator,
    rouge: RougeCalculator,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self {
            bleu: BleuCalculator::from_config(&config),
            rouge: RougeCalculator::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Metric names produced by [`Scorer::score`], in report order.
    pub fn metric_names(&self) -> Vec<String> {
        (1..=self.config.max_order)
            .map(bleu_metric_name)
            .chain(std::iter::once(ROUGE_L.to_string()))
            .collect()
    }

    #[instrument(skip_all, fields(items = batch.len()))]
    pub fn evaluate(&self, batch: EvaluationBatch) -> Result<EvaluationReport> {
        let corpus = batch.into_corpus()?;
        let ids: Vec<String> = corpus.pairs().iter().map(|pair| pair.id.clone()).collect();

        let bleu = self.bleu.compute(corpus.clone())?;
        let rouge = self.rouge.compute(corpus)?;

        let mut scores = MetricScores::new();
        for (order, score) in bleu.scores.iter().enumerate() {
            scores.insert(bleu_metric_name(order + 1), *score);
        }
        scores.insert(ROUGE_L, rouge.score);

        let items = ids
            .into_iter()
            .zip(bleu.item_scores)
            .map(|(id, bleu)| {
                let rouge_l = rouge.item_scores.get(&id).copied().unwrap_or(0.0);
                ItemScores { id, bleu, rouge_l }
            })
            .collect();

        info!(
            methods = ?[self.bleu.method(), self.rouge.method()],
            rouge_l = rouge.score,
            "Scored batch"
        );

        Ok(EvaluationReport { scores, items })
    }

    pub fn score(&self, batch: EvaluationBatch) -> Result<MetricScores> {
        Ok(self.evaluate(batch)?.scores)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        let config = ScoringConfig::default();
        Self {
            bleu: BleuCalculator::from_config(&config),
            rouge: RougeCalculator::from_config(&config),
            config,
        }
    }
}
