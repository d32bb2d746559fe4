//! Fixed-order feature vector consumed by the trained classifier.
//!
//! The slot order is a contract with the fitted scaler and model. It must
//! never be permuted:
//!
//! `[gender_code, age, glucose_value, glucose_context, systolic, diastolic, spo2, temperature, heart_rate]`

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitalsError};

/// Number of slots in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 9;

/// Named position in the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSlot {
    GenderCode,
    Age,
    GlucoseValue,
    GlucoseContext,
    Systolic,
    Diastolic,
    Spo2,
    Temperature,
    HeartRate,
}

impl FeatureSlot {
    /// All slots in canonical order.
    pub const ALL: [Self; FEATURE_COUNT] = [
        Self::GenderCode,
        Self::Age,
        Self::GlucoseValue,
        Self::GlucoseContext,
        Self::Systolic,
        Self::Diastolic,
        Self::Spo2,
        Self::Temperature,
        Self::HeartRate,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(VitalsError::UnknownSlot(index))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::GenderCode => "gender_code",
            Self::Age => "age",
            Self::GlucoseValue => "glucose_value",
            Self::GlucoseContext => "glucose_context",
            Self::Systolic => "systolic",
            Self::Diastolic => "diastolic",
            Self::Spo2 => "spo2",
            Self::Temperature => "temperature",
            Self::HeartRate => "heart_rate",
        }
    }
}

impl fmt::Display for FeatureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable 9-slot numeric vector in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, slot: FeatureSlot) -> f64 {
        self.0[slot.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Iterates `(slot, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureSlot, f64)> + '_ {
        FeatureSlot::ALL.into_iter().zip(self.0.iter().copied())
    }

    pub const fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Index<FeatureSlot> for FeatureVector {
    type Output = f64;

    fn index(&self, slot: FeatureSlot) -> &Self::Output {
        &self.0[slot.index()]
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = VitalsError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        let actual = values.len();
        let values: [f64; FEATURE_COUNT] =
            values.try_into().map_err(|_| VitalsError::FeatureCount {
                expected: FEATURE_COUNT,
                actual,
            })?;
        Ok(Self(values))
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(vector: FeatureVector) -> Self {
        vector.to_vec()
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
