use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::corpus::Corpus;
use crate::error::{EvalError, Result};

/// Id-keyed hypotheses and references for one scoring request.
///
/// Each id maps to a list of hypotheses (which must hold exactly one entry)
/// and a non-empty list of references. Both maps must share the same keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationBatch {
    pub hypotheses: BTreeMap<String, Vec<String>>,
    pub references: BTreeMap<String, Vec<String>>,
}

impl EvaluationBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a single-item batch from line-oriented texts.
    ///
    /// Lines on each side are trimmed and joined with a single space; the item
    /// is keyed `"0"`.
    pub fn single<R, H>(reference_lines: R, hypothesis_lines: H) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        H: IntoIterator,
        H::Item: AsRef<str>,
    {
        let reference = join_trimmed(reference_lines);
        let hypothesis = join_trimmed(hypothesis_lines);

        Self::new().with_item("0", hypothesis, vec![reference])
    }

    pub fn with_item(
        mut self,
        id: impl Into<String>,
        hypothesis: impl Into<String>,
        references: Vec<String>,
    ) -> Self {
        let id = id.into();
        self.hypotheses.insert(id.clone(), vec![hypothesis.into()]);
        self.references.insert(id, references);
        self
    }

    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// Check key-set equality, hypothesis cardinality and reference presence.
    pub fn validate(&self) -> Result<()> {
        let missing_hypotheses: Vec<String> = self
            .references
            .keys()
            .filter(|id| !self.hypotheses.contains_key(*id))
            .cloned()
            .collect();
        let missing_references: Vec<String> = self
            .hypotheses
            .keys()
            .filter(|id| !self.references.contains_key(*id))
            .cloned()
            .collect();

        if !missing_hypotheses.is_empty() || !missing_references.is_empty() {
            return Err(EvalError::KeySetMismatch {
                missing_hypotheses,
                missing_references,
            });
        }

        for (id, hypotheses) in &self.hypotheses {
            if hypotheses.len() != 1 {
                return Err(EvalError::HypothesisCardinality {
                    id: id.clone(),
                    count: hypotheses.len(),
                });
            }
        }

        for (id, references) in &self.references {
            if references.is_empty() {
                return Err(EvalError::EmptyReferences { id: id.clone() });
            }
        }

        Ok(())
    }

    /// Validate and convert into a corpus, in ascending id order.
    pub fn into_corpus(self) -> Result<Corpus> {
        self.validate()?;

        let mut references = self.references;
        let mut corpus = Corpus::with_capacity(self.hypotheses.len());
        for (id, mut hypotheses) in self.hypotheses {
            // validate() guarantees both entries exist
            let refs = references.remove(&id).unwrap_or_default();
            let hypothesis = hypotheses.pop().unwrap_or_default();
            corpus.accumulate(id, hypothesis, refs)?;
        }

        Ok(corpus)
    }
}

fn join_trimmed<I>(lines: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
