//! Lenient numeric coercion for hand-entered measurements.
//!
//! Handles the formats seen at the bedside:
//! - Decimal comma: "36,5"
//! - Whitespace: "  72  "
//! - Trailing unit noise: "98%", "36.5C", "120 mmHg"
//!
//! Anything else coerces to `0.0`. The cause is available through
//! [`try_coerce`] and is logged at debug level by [`coerce`].
//!
//! Values that overflow to infinity are returned as parsed; range clamping
//! saturates them to the nearest bound.

use thiserror::Error;
use tracing::debug;

use vitals_model::RawValue;

use crate::redact::redact_value;

/// Value substituted when coercion fails.
pub const COERCION_FALLBACK: f64 = 0.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoercionError {
    #[error("empty value")]
    Empty,
    #[error("not a number")]
    Invalid,
    #[error("NaN")]
    NaN,
}

/// Parses a decimal string, accepting a comma separator and trailing noise.
pub fn parse_decimal(value: &str) -> Result<f64, CoercionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoercionError::Empty);
    }

    let normalized = trimmed.replace(',', ".");
    let parsed = match normalized.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            let stripped = strip_trailing_noise(&normalized);
            if stripped.is_empty() || stripped.len() == normalized.len() {
                return Err(CoercionError::Invalid);
            }
            stripped.parse::<f64>().map_err(|_| CoercionError::Invalid)?
        }
    };

    if parsed.is_nan() {
        return Err(CoercionError::NaN);
    }
    Ok(parsed)
}

/// Removes trailing characters that cannot end a decimal number.
fn strip_trailing_noise(value: &str) -> &str {
    value
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .trim_end()
}

/// Coerces a raw field to a number, reporting why it could not.
pub fn try_coerce(raw: &RawValue) -> Result<f64, CoercionError> {
    match raw {
        RawValue::Text(text) => parse_decimal(text),
        other => match other.as_number() {
            Some(value) if value.is_nan() => Err(CoercionError::NaN),
            Some(value) => Ok(value),
            None => Err(CoercionError::Invalid),
        },
    }
}

/// Coerces a raw field to a number, substituting `0.0` on failure.
pub fn coerce(raw: &RawValue) -> f64 {
    match try_coerce(raw) {
        Ok(value) => value,
        Err(err) => {
            let text = raw.as_text();
            debug!(
                reason = %err,
                value = redact_value(&text),
                "numeric coercion fell back to {COERCION_FALLBACK}"
            );
            COERCION_FALLBACK
        }
    }
}
