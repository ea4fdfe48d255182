use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

/// One hypothesis paired with the references it is scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPair {
    pub id: String,
    pub hypothesis: String,
    pub references: Vec<String>,
}

/// The pairs submitted for a single scoring run.
///
/// A corpus is built up with [`Corpus::accumulate`] and then handed by value
/// to a scorer; it is never reused across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    pairs: Vec<ScoredPair>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Append a pair. Fails if `references` is empty.
    pub fn accumulate(
        &mut self,
        id: impl Into<String>,
        hypothesis: impl Into<String>,
        references: Vec<String>,
    ) -> Result<()> {
        let id = id.into();
        if references.is_empty() {
            return Err(EvalError::EmptyReferences { id });
        }

        self.pairs.push(ScoredPair {
            id,
            hypothesis: hypothesis.into(),
            references,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[ScoredPair] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<ScoredPair> {
        self.pairs
    }
}
