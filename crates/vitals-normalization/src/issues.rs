//! Structured record of every fallback and clamp applied during normalization.
//!
//! Malformed input never fails normalization. Instead each substitution is
//! recorded here so callers can inspect why a slot holds the value it does.

use serde::Serialize;

use vitals_model::FeatureSlot;

/// What happened to a single slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// The field was absent or empty; the slot holds its sentinel.
    Missing,
    /// The field was present but unusable; the slot holds its sentinel.
    Fallback { reason: String },
    /// The value was outside its physiological range.
    Clamped { original: f64, clamped: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizationIssue {
    pub slot: FeatureSlot,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl NormalizationIssue {
    pub fn missing(slot: FeatureSlot) -> Self {
        Self {
            slot,
            kind: IssueKind::Missing,
        }
    }

    pub fn fallback(slot: FeatureSlot, reason: impl ToString) -> Self {
        Self {
            slot,
            kind: IssueKind::Fallback {
                reason: reason.to_string(),
            },
        }
    }

    pub fn clamped(slot: FeatureSlot, original: f64, clamped: f64) -> Self {
        Self {
            slot,
            kind: IssueKind::Clamped { original, clamped },
        }
    }

    pub fn is_clamp(&self) -> bool {
        matches!(self.kind, IssueKind::Clamped { .. })
    }
}

/// A normalized value together with the issues raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub value: T,
    pub issues: Vec<NormalizationIssue>,
}

impl<T> Normalized<T> {
    pub fn new(value: T, issues: Vec<NormalizationIssue>) -> Self {
        Self { value, issues }
    }
}
