//! Immutable inference context shared across request handlers.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use vitals_model::{ClinicalRecord, FeatureVector, NormalizationOptions};
use vitals_normalization::{AssembledFeatures, FeatureAssembler};

use crate::error::Result;
use crate::ports::{Model, Scaler};
use crate::response::{Prediction, PredictionOutcome};

/// Scaler, model and normalization options, built once at startup.
///
/// Cloning is cheap; clones share the same scaler and model.
#[derive(Clone)]
pub struct InferenceContext {
    assembler: FeatureAssembler,
    scaler: Arc<dyn Scaler>,
    model: Arc<dyn Model>,
}

impl fmt::Debug for InferenceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceContext")
            .field("options", self.assembler.options())
            .finish_non_exhaustive()
    }
}

impl InferenceContext {
    pub fn new(scaler: Arc<dyn Scaler>, model: Arc<dyn Model>) -> Self {
        Self {
            assembler: FeatureAssembler::default(),
            scaler,
            model,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: NormalizationOptions) -> Self {
        self.assembler = FeatureAssembler::new(options);
        self
    }

    pub fn options(&self) -> &NormalizationOptions {
        self.assembler.options()
    }

    /// Normalizes a record without invoking the model.
    pub fn assemble(&self, record: &ClinicalRecord) -> AssembledFeatures {
        self.assembler.assemble_with_report(record)
    }

    /// Scales an assembled vector and classifies it.
    ///
    /// # Errors
    /// Propagates scaler or model faults unchanged.
    pub fn classify(&self, features: &FeatureVector) -> Result<String> {
        let scaled = self.scaler.transform(features.as_slice())?;
        self.model.predict(&scaled)
    }

    /// Runs the full pipeline for one record.
    ///
    /// # Errors
    /// Returns an error only for scaler or model faults; malformed input
    /// is absorbed during normalization.
    pub fn predict(&self, record: &ClinicalRecord) -> Result<Prediction> {
        let assembled = self.assemble(record);
        let risk = self.classify(&assembled.features).inspect_err(|err| {
            warn!(error = %err, "inference failed");
        })?;
        debug!(
            glucose_value = assembled.glucose.value,
            glucose_context = assembled.glucose.context.code(),
            substitutions = assembled.issues.len(),
            "prediction complete"
        );
        Ok(Prediction {
            risk,
            glucose_value: assembled.glucose.value,
            glucose_context: assembled.glucose.context,
        })
    }

    /// [`predict`](Self::predict) mapped to the serving layer's wire shape.
    pub fn respond(&self, record: &ClinicalRecord) -> PredictionOutcome {
        PredictionOutcome::from_result(self.predict(record))
    }
}
