//! Standardization scaler: `(x - mean) / scale` per feature.

use vitals_model::FEATURE_COUNT;

use crate::error::{InferenceError, Result};
use crate::ports::Scaler;

/// Per-feature standardization with fitted means and scales.
///
/// A zero scale marks a constant feature during fitting and is treated as
/// `1.0`, leaving the centered value unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Creates a scaler for the canonical feature layout.
    ///
    /// # Errors
    /// Returns `InferenceError::ShapeMismatch` unless both parameter vectors
    /// have one entry per feature slot.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        for params in [&mean, &scale] {
            if params.len() != FEATURE_COUNT {
                return Err(InferenceError::ShapeMismatch {
                    stage: "scaler parameters",
                    expected: FEATURE_COUNT,
                    actual: params.len(),
                });
            }
        }
        Ok(Self { mean, scale })
    }

    /// Scaler that passes features through unchanged.
    pub fn identity() -> Self {
        Self {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        }
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.mean.len() {
            return Err(InferenceError::ShapeMismatch {
                stage: "scaler",
                expected: self.mean.len(),
                actual: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(value, (mean, scale))| {
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (value - mean) / scale
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardizes_each_feature() {
        let scaler = StandardScaler::new(
            vec![0.5, 50.0, 150.0, 1.5, 120.0, 80.0, 96.0, 36.5, 80.0],
            vec![0.5, 10.0, 50.0, 0.5, 20.0, 10.0, 2.0, 0.5, 0.0],
        )
        .expect("valid parameters");
        let scaled = scaler
            .transform(&[1.0, 45.0, 150.0, 1.0, 120.0, 80.0, 98.0, 36.0, 72.0])
            .expect("transform");
        assert_eq!(
            scaled,
            vec![1.0, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0, -1.0, -8.0]
        );
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(StandardScaler::new(vec![0.0; 8], vec![1.0; 9]).is_err());
        let err = StandardScaler::identity().transform(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            InferenceError::ShapeMismatch {
                stage: "scaler",
                expected: FEATURE_COUNT,
                actual: 2
            }
        );
    }
}
