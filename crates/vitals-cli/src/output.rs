//! JSON line output for assembled records.

use serde::Serialize;

use vitals_model::{FeatureVector, GlucoseContext};
use vitals_normalization::{AssembledFeatures, NormalizationIssue};

/// One output line of `vitals features`.
#[derive(Debug, Serialize)]
pub struct FeatureLine<'a> {
    pub features: &'a FeatureVector,
    pub glucose_value: i64,
    pub glucose_context: GlucoseContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<&'a [NormalizationIssue]>,
}

impl<'a> FeatureLine<'a> {
    pub fn new(assembled: &'a AssembledFeatures, report: bool) -> Self {
        Self {
            features: &assembled.features,
            glucose_value: assembled.glucose.value,
            glucose_context: assembled.glucose.context,
            issues: report.then_some(assembled.issues.as_slice()),
        }
    }
}

/// Serializes one record as a single JSON line (no trailing newline).
pub fn to_json_line(assembled: &AssembledFeatures, report: bool) -> serde_json::Result<String> {
    serde_json::to_string(&FeatureLine::new(assembled, report))
}
