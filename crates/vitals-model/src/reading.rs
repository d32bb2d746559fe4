//! Normalized readings produced by the field parsers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VitalsError;

/// When the glucose sample was taken relative to a meal.
///
/// Encoded as `1` (suffix `a`) or `2` (suffix `b`) in the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GlucoseContext {
    #[default]
    Fasting,
    PostPrandial,
}

impl GlucoseContext {
    pub fn code(self) -> u8 {
        match self {
            Self::Fasting => 1,
            Self::PostPrandial => 2,
        }
    }

    /// Maps a trailing annotation letter to its context.
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'a' => Some(Self::Fasting),
            'b' => Some(Self::PostPrandial),
            _ => None,
        }
    }
}

impl From<GlucoseContext> for u8 {
    fn from(context: GlucoseContext) -> Self {
        context.code()
    }
}

impl TryFrom<u8> for GlucoseContext {
    type Error = VitalsError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Fasting),
            2 => Ok(Self::PostPrandial),
            other => Err(VitalsError::UnknownGlucoseContext(other)),
        }
    }
}

impl fmt::Display for GlucoseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fasting => f.write_str("fasting"),
            Self::PostPrandial => f.write_str("post-prandial"),
        }
    }
}

/// Integer glucose value with its measurement context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlucoseReading {
    pub value: i64,
    pub context: GlucoseContext,
}

impl GlucoseReading {
    pub const fn new(value: i64, context: GlucoseContext) -> Self {
        Self { value, context }
    }

    /// Reading used when the input carries no usable magnitude.
    pub const fn missing(context: GlucoseContext) -> Self {
        Self { value: 0, context }
    }
}

/// Systolic/diastolic pair in mmHg.
///
/// `(0, 0)` is the sentinel for an absent or unusable reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: i64,
    pub diastolic: i64,
}

impl BloodPressure {
    pub const MISSING: Self = Self {
        systolic: 0,
        diastolic: 0,
    };

    pub const fn new(systolic: i64, diastolic: i64) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }

    pub fn is_missing(&self) -> bool {
        *self == Self::MISSING
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}
