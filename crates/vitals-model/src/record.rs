//! Raw clinical input as entered by staff.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A field that arrives either as free text or as a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl RawValue {
    /// Returns the textual form of the value.
    ///
    /// Numbers use the shortest round-trip representation, so `45.0`
    /// renders as `"45"`. Booleans render as `"1"` / `"0"`.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Number(value) => Cow::Owned(format!("{value}")),
            Self::Bool(true) => Cow::Borrowed("1"),
            Self::Bool(false) => Cow::Borrowed("0"),
        }
    }

    /// Returns the numeric value when the input was already numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// One patient observation as submitted for risk screening.
///
/// Every field is optional. Missing fields fall back to zero-equivalent
/// sentinels during feature assembly; unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalRecord {
    pub gender: Option<RawValue>,
    pub age: Option<RawValue>,
    pub heart_rate: Option<RawValue>,
    pub spo2: Option<RawValue>,
    pub temperature: Option<RawValue>,
    /// Glucose with an optional context suffix, e.g. `"150a"` or `"180,7b"`.
    pub glucose: Option<RawValue>,
    /// Compound systolic/diastolic reading, e.g. `"120/80"`.
    pub blood_pressure: Option<RawValue>,
}

impl ClinicalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gender(mut self, value: impl Into<RawValue>) -> Self {
        self.gender = Some(value.into());
        self
    }

    pub fn with_age(mut self, value: impl Into<RawValue>) -> Self {
        self.age = Some(value.into());
        self
    }

    pub fn with_heart_rate(mut self, value: impl Into<RawValue>) -> Self {
        self.heart_rate = Some(value.into());
        self
    }

    pub fn with_spo2(mut self, value: impl Into<RawValue>) -> Self {
        self.spo2 = Some(value.into());
        self
    }

    pub fn with_temperature(mut self, value: impl Into<RawValue>) -> Self {
        self.temperature = Some(value.into());
        self
    }

    pub fn with_glucose(mut self, value: impl Into<RawValue>) -> Self {
        self.glucose = Some(value.into());
        self
    }

    pub fn with_blood_pressure(mut self, value: impl Into<RawValue>) -> Self {
        self.blood_pressure = Some(value.into());
        self
    }
}
