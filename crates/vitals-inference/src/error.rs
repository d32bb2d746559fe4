use thiserror::Error;

/// Faults raised at the scaler/model boundary.
///
/// Malformed clinical input never ends up here; it is absorbed during
/// normalization.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InferenceError {
    #[error("{stage} expected {expected} features, got {actual}")]
    ShapeMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("scaler failed: {0}")]
    Scaler(String),
    #[error("model failed: {0}")]
    Model(String),
}

pub type Result<T> = std::result::Result<T, InferenceError>;
