//! Systolic/diastolic parsing for compound "S/D" readings.

use thiserror::Error;
use tracing::debug;

use vitals_model::{BloodPressure, FeatureSlot, PhysiologicalRange, RawValue, RoundingPolicy};

use crate::issues::{NormalizationIssue, Normalized};
use crate::numeric::{COERCION_FALLBACK, parse_decimal};
use crate::range::clamp_tracked;
use crate::redact::redact_value;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BloodPressureError {
    #[error("blood pressure is empty")]
    Empty,
    #[error("blood pressure has no '/' separator")]
    MissingSeparator,
}

/// Splits a reading on the first `/` into its systolic and diastolic text.
pub fn split_blood_pressure(value: &str) -> Result<(&str, &str), BloodPressureError> {
    if value.trim().is_empty() {
        return Err(BloodPressureError::Empty);
    }
    value
        .split_once('/')
        .ok_or(BloodPressureError::MissingSeparator)
}

/// Parses a blood pressure reading with the default rounding policy.
///
/// Returns `(0, 0)` when the input is empty or has no `/`.
pub fn parse_blood_pressure(value: &str) -> BloodPressure {
    normalize_blood_pressure_str(Some(value), RoundingPolicy::default()).value
}

/// Normalizes an optional raw reading, recording fallbacks and clamps.
pub fn normalize_blood_pressure(
    raw: Option<&RawValue>,
    rounding: RoundingPolicy,
) -> Normalized<BloodPressure> {
    match raw {
        Some(raw) => normalize_blood_pressure_str(Some(&raw.as_text()), rounding),
        None => normalize_blood_pressure_str(None, rounding),
    }
}

fn normalize_blood_pressure_str(
    value: Option<&str>,
    rounding: RoundingPolicy,
) -> Normalized<BloodPressure> {
    let Some(value) = value else {
        return Normalized::new(
            BloodPressure::MISSING,
            vec![
                NormalizationIssue::missing(FeatureSlot::Systolic),
                NormalizationIssue::missing(FeatureSlot::Diastolic),
            ],
        );
    };

    let (systolic, diastolic) = match split_blood_pressure(value) {
        Ok(parts) => parts,
        Err(err) => {
            debug!(
                reason = %err,
                value = redact_value(value),
                "blood pressure fell back to {}",
                BloodPressure::MISSING
            );
            let issues = match err {
                BloodPressureError::Empty => vec![
                    NormalizationIssue::missing(FeatureSlot::Systolic),
                    NormalizationIssue::missing(FeatureSlot::Diastolic),
                ],
                BloodPressureError::MissingSeparator => vec![
                    NormalizationIssue::fallback(FeatureSlot::Systolic, err),
                    NormalizationIssue::fallback(FeatureSlot::Diastolic, err),
                ],
            };
            return Normalized::new(BloodPressure::MISSING, issues);
        }
    };

    let mut issues = Vec::new();
    let systolic = normalize_side(
        systolic,
        FeatureSlot::Systolic,
        &PhysiologicalRange::SYSTOLIC,
        rounding,
        &mut issues,
    );
    let diastolic = normalize_side(
        diastolic,
        FeatureSlot::Diastolic,
        &PhysiologicalRange::DIASTOLIC,
        rounding,
        &mut issues,
    );
    Normalized::new(BloodPressure::new(systolic, diastolic), issues)
}

/// Coerce, clamp, then round one side of the reading.
fn normalize_side(
    value: &str,
    slot: FeatureSlot,
    range: &PhysiologicalRange,
    rounding: RoundingPolicy,
    issues: &mut Vec<NormalizationIssue>,
) -> i64 {
    let parsed = match parse_decimal(value) {
        Ok(v) => v,
        Err(err) => {
            debug!(slot = %slot, reason = %err, "blood pressure component coerced to 0");
            issues.push(NormalizationIssue::fallback(slot, err));
            COERCION_FALLBACK
        }
    };
    let clamped = clamp_tracked(parsed, slot, range, issues);
    rounding.round_to_int(clamped)
}
