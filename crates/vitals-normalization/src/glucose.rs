//! Glucose parsing for annotated readings such as `"150a"` or `"180,7b"`.
//!
//! The trailing letter carries the measurement context:
//! - `a`: fasting (code 1, also the default when no letter is present)
//! - `b`: two hours post-prandial (code 2)
//!
//! The magnitude is clamped to the glucose range and rounded to an integer,
//! since the model was trained on integer glucose values. A magnitude that
//! cannot be parsed yields `0` and is not clamped.

use thiserror::Error;
use tracing::debug;

use vitals_model::{
    FeatureSlot, GlucoseContext, GlucoseReading, PhysiologicalRange, RawValue, RoundingPolicy,
};

use crate::issues::{NormalizationIssue, Normalized};
use crate::numeric::{CoercionError, parse_decimal};
use crate::range::clamp_tracked;
use crate::redact::redact_value;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GlucoseError {
    #[error("glucose is empty")]
    Empty,
    #[error("glucose magnitude: {source}")]
    Magnitude {
        context: GlucoseContext,
        source: CoercionError,
    },
}

impl GlucoseError {
    /// Reading substituted for this failure. The detected context is kept.
    pub fn fallback_reading(&self) -> GlucoseReading {
        match self {
            Self::Empty => GlucoseReading::missing(GlucoseContext::Fasting),
            Self::Magnitude { context, .. } => GlucoseReading::missing(*context),
        }
    }
}

/// Separates the context suffix from the magnitude text.
///
/// Expects input that is already trimmed and lowercased.
pub fn split_glucose(value: &str) -> (&str, GlucoseContext) {
    match value.chars().last().and_then(GlucoseContext::from_suffix) {
        // Both suffix letters are single-byte.
        Some(context) => (&value[..value.len() - 1], context),
        None => (value, GlucoseContext::default()),
    }
}

/// Parses an annotated glucose string, reporting why no magnitude was found.
pub fn try_parse_glucose(
    value: &str,
    rounding: RoundingPolicy,
) -> Result<GlucoseReading, GlucoseError> {
    parse_glucose_tracked(value, rounding, &mut Vec::new())
}

fn parse_glucose_tracked(
    value: &str,
    rounding: RoundingPolicy,
    issues: &mut Vec<NormalizationIssue>,
) -> Result<GlucoseReading, GlucoseError> {
    let normalized = value.trim().to_lowercase();
    if normalized.is_empty() || normalized == "nan" {
        return Err(GlucoseError::Empty);
    }

    let (magnitude, context) = split_glucose(&normalized);
    let parsed = parse_decimal(magnitude)
        .map_err(|source| GlucoseError::Magnitude { context, source })?;

    let clamped = clamp_tracked(
        parsed,
        FeatureSlot::GlucoseValue,
        &PhysiologicalRange::GLUCOSE,
        issues,
    );
    Ok(GlucoseReading::new(rounding.round_to_int(clamped), context))
}

/// Parses a glucose reading with the default rounding policy.
///
/// `"150a"` gives `(150, fasting)`, `"180,7b"` gives `(181, post-prandial)`,
/// empty input or `"nan"` gives `(0, fasting)`.
pub fn parse_glucose(value: &str) -> GlucoseReading {
    normalize_glucose_str(Some(value), RoundingPolicy::default()).value
}

/// Normalizes an optional raw glucose field, recording fallbacks and clamps.
pub fn normalize_glucose(
    raw: Option<&RawValue>,
    rounding: RoundingPolicy,
) -> Normalized<GlucoseReading> {
    match raw {
        Some(raw) => normalize_glucose_str(Some(&raw.as_text()), rounding),
        None => normalize_glucose_str(None, rounding),
    }
}

fn normalize_glucose_str(
    value: Option<&str>,
    rounding: RoundingPolicy,
) -> Normalized<GlucoseReading> {
    let Some(value) = value else {
        return Normalized::new(
            GlucoseReading::default(),
            vec![NormalizationIssue::missing(FeatureSlot::GlucoseValue)],
        );
    };

    let mut issues = Vec::new();
    match parse_glucose_tracked(value, rounding, &mut issues) {
        Ok(reading) => Normalized::new(reading, issues),
        Err(err) => {
            let reading = err.fallback_reading();
            debug!(
                reason = %err,
                value = redact_value(value),
                context = reading.context.code(),
                "glucose value fell back to 0"
            );
            let issue = match err {
                GlucoseError::Empty => NormalizationIssue::missing(FeatureSlot::GlucoseValue),
                GlucoseError::Magnitude { .. } => {
                    NormalizationIssue::fallback(FeatureSlot::GlucoseValue, err)
                }
            };
            issues.push(issue);
            Normalized::new(reading, issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(value: i64, code: u8) -> GlucoseReading {
        let context = GlucoseContext::try_from(code).expect("valid context code");
        GlucoseReading::new(value, context)
    }

    #[test]
    fn parses_context_suffix() {
        assert_eq!(parse_glucose("150a"), reading(150, 1));
        assert_eq!(parse_glucose("200b"), reading(200, 2));
        assert_eq!(parse_glucose("160"), reading(160, 1));
    }

    #[test]
    fn decimal_comma_is_rounded() {
        assert_eq!(parse_glucose("180,7b"), reading(181, 2));
        assert_eq!(parse_glucose("99.5a"), reading(100, 1));
    }

    #[test]
    fn suffix_is_case_insensitive_and_trimmed() {
        assert_eq!(parse_glucose("  150B "), reading(150, 2));
    }

    #[test]
    fn empty_and_nan_default_to_fasting_zero() {
        assert_eq!(parse_glucose(""), reading(0, 1));
        assert_eq!(parse_glucose("   "), reading(0, 1));
        assert_eq!(parse_glucose("nan"), reading(0, 1));
        assert_eq!(parse_glucose("NaN"), reading(0, 1));
    }

    #[test]
    fn clamps_to_glucose_range() {
        assert_eq!(parse_glucose("999a"), reading(500, 1));
        assert_eq!(parse_glucose("12b"), reading(40, 2));
    }

    #[test]
    fn overflowing_magnitude_saturates() {
        assert_eq!(parse_glucose("1e400a"), reading(500, 1));
        assert_eq!(parse_glucose("-1e400b"), reading(40, 2));
    }

    #[test]
    fn unparsable_magnitude_is_zero_and_unclamped() {
        assert_eq!(parse_glucose("a"), reading(0, 1));
        assert_eq!(parse_glucose("abc"), reading(0, 1));
        assert_eq!(parse_glucose("b"), reading(0, 2));
    }

    #[test]
    fn errors_explain_the_fallback() {
        assert_eq!(
            try_parse_glucose("nan", RoundingPolicy::HalfEven),
            Err(GlucoseError::Empty)
        );
        let err = try_parse_glucose("xb", RoundingPolicy::HalfEven).unwrap_err();
        assert_eq!(
            err,
            GlucoseError::Magnitude {
                context: GlucoseContext::PostPrandial,
                source: CoercionError::Invalid,
            }
        );
        assert_eq!(err.fallback_reading(), reading(0, 2));
    }

    #[test]
    fn split_keeps_magnitude_text() {
        assert_eq!(split_glucose("180,7b"), ("180,7", GlucoseContext::PostPrandial));
        assert_eq!(split_glucose("150"), ("150", GlucoseContext::Fasting));
        assert_eq!(split_glucose(""), ("", GlucoseContext::Fasting));
    }

    #[test]
    fn numeric_input_is_accepted() {
        let normalized = normalize_glucose(Some(&RawValue::from(150.0)), RoundingPolicy::HalfEven);
        assert_eq!(normalized.value, reading(150, 1));
        assert!(normalized.issues.is_empty());
    }

    #[test]
    fn fallback_and_clamp_are_reported() {
        let fallback = normalize_glucose(Some(&RawValue::from("abc")), RoundingPolicy::HalfEven);
        assert_eq!(
            fallback.issues,
            vec![NormalizationIssue::fallback(
                FeatureSlot::GlucoseValue,
                "glucose magnitude: not a number"
            )]
        );

        let clamped = normalize_glucose(Some(&RawValue::from("999a")), RoundingPolicy::HalfEven);
        assert_eq!(
            clamped.issues,
            vec![NormalizationIssue::clamped(
                FeatureSlot::GlucoseValue,
                999.0,
                500.0
            )]
        );
    }
}
