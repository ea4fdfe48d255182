use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ROUGE_L: &str = "ROUGE_L";

/// Name of the BLEU score for n-gram order `order` (1-based), e.g. `Bleu_4`.
pub fn bleu_metric_name(order: usize) -> String {
    format!("Bleu_{}", order)
}

/// Flat metric name to score mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricScores(BTreeMap<String, f64>);

impl MetricScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, score: f64) -> Option<f64> {
        self.0.insert(name.into(), score)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Diagnostic scores for one item of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemScores {
    pub id: String,
    pub bleu: Vec<f64>,
    pub rouge_l: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub scores: MetricScores,
    pub items: Vec<ItemScores>,
}
