//! Wire shapes returned to the serving layer.

use serde::{Deserialize, Serialize};

use vitals_model::GlucoseContext;

use crate::error::InferenceError;

/// Successful prediction plus the normalized glucose fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub risk: String,
    pub glucose_value: i64,
    pub glucose_context: GlucoseContext,
}

/// Structured error body: `{ "error": <message> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&InferenceError> for ErrorResponse {
    fn from(err: &InferenceError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Either a prediction or a structured error, serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionOutcome {
    Success(Prediction),
    Failure(ErrorResponse),
}

impl PredictionOutcome {
    pub fn from_result(result: Result<Prediction, InferenceError>) -> Self {
        match result {
            Ok(prediction) => Self::Success(prediction),
            Err(err) => Self::Failure(ErrorResponse::from(&err)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
