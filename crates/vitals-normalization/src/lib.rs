//! Normalization of hand-entered clinical vitals into model features.
//!
//! This crate turns a [`ClinicalRecord`](vitals_model::ClinicalRecord) into
//! the fixed-order [`FeatureVector`](vitals_model::FeatureVector) the
//! classifier was trained on:
//!
//! - **numeric**: lenient decimal coercion (decimal comma, unit noise)
//! - **range**: physiological range clamping
//! - **blood_pressure**: "S/D" splitting, clamping and rounding
//! - **glucose**: magnitude plus fasting/post-prandial context suffix
//! - **assembler**: whole-record feature assembly with an issue report
//! - **redact**: PHI-safe logging of raw values
//!
//! Malformed input never produces an error here. Every parser has a
//! documented sentinel, and the substitution is recorded as a
//! [`NormalizationIssue`].

pub mod assembler;
pub mod blood_pressure;
pub mod glucose;
pub mod issues;
pub mod numeric;
pub mod range;
pub mod redact;

pub use assembler::{AssembledFeatures, FeatureAssembler, assemble};
pub use blood_pressure::{BloodPressureError, parse_blood_pressure};
pub use glucose::{GlucoseError, parse_glucose};
pub use issues::{IssueKind, NormalizationIssue, Normalized};
pub use numeric::{CoercionError, coerce, try_coerce};
pub use range::clamp;
pub use redact::{redact_value, set_log_data_enabled};
