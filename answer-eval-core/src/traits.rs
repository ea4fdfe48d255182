use crate::domain::corpus::Corpus;
use crate::error::Result;

/// A corpus-level similarity metric.
///
/// The corpus is taken by value: once reduction starts, nothing else can
/// accumulate into it.
pub trait CorpusScorer {
    type Output;

    /// Short method label, e.g. `"Bleu"`.
    fn method(&self) -> &'static str;

    fn compute(&self, corpus: Corpus) -> Result<Self::Output>;
}
