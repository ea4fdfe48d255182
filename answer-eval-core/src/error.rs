use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Key set mismatch: missing hypotheses for {missing_hypotheses:?}, missing references for {missing_references:?}")]
    KeySetMismatch {
        missing_hypotheses: Vec<String>,
        missing_references: Vec<String>,
    },

    #[error("Item {id} must have exactly one hypothesis, got {count}")]
    HypothesisCardinality { id: String, count: usize },

    #[error("Item {id} has no references")]
    EmptyReferences { id: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, EvalError>;

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for EvalError {
    fn from(err: validator::ValidationErrors) -> Self {
        EvalError::Config(err.to_string())
    }
}
