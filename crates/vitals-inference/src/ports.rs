//! Ports for the pre-fitted scaler and classifier.
//!
//! Both are opaque, deterministic and read-only once constructed. Loading
//! them from artifacts happens outside this crate.

use crate::error::Result;

/// Feature scaling fitted alongside the classifier.
pub trait Scaler: Send + Sync {
    /// Maps a raw feature vector to the scaled space the model expects.
    ///
    /// # Errors
    /// Returns `InferenceError::ShapeMismatch` if `features` has the wrong length.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>>;
}

/// Pre-trained risk classifier.
pub trait Model: Send + Sync {
    /// Predicts a risk label for a scaled feature vector.
    ///
    /// # Errors
    /// Returns an error if the model rejects the input.
    fn predict(&self, scaled: &[f64]) -> Result<String>;
}
