use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VitalsError {
    #[error("expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },
    #[error("unknown glucose context code {0}")]
    UnknownGlucoseContext(u8),
    #[error("unknown feature slot index {0}")]
    UnknownSlot(usize),
}

pub type Result<T> = std::result::Result<T, VitalsError>;
