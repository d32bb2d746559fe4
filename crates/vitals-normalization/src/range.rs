//! Physiological range clamping.

use tracing::trace;

use vitals_model::{FeatureSlot, PhysiologicalRange};

use crate::issues::NormalizationIssue;

/// Restricts `value` to `range`; NaN maps to the lower bound.
#[must_use]
pub fn clamp(value: f64, range: &PhysiologicalRange) -> f64 {
    range.clamp(value)
}

/// Clamps `value` and records a [`NormalizationIssue`] when it moved.
pub(crate) fn clamp_tracked(
    value: f64,
    slot: FeatureSlot,
    range: &PhysiologicalRange,
    issues: &mut Vec<NormalizationIssue>,
) -> f64 {
    let clamped = range.clamp(value);
    if clamped != value {
        trace!(
            slot = %slot,
            range = range.name,
            lower = range.lower,
            upper = range.upper,
            "value clamped to physiological range"
        );
        issues.push(NormalizationIssue::clamped(slot, value, clamped));
    }
    clamped
}
