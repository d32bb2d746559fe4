//! Configuration options for feature normalization.

use serde::{Deserialize, Serialize};

/// Gender token (lowercase) that encodes as `1`. Everything else encodes as `0`.
pub const DEFAULT_MALE_TOKEN: &str = "laki-laki";

/// How fractional values are rounded to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Ties go to the even neighbour (`36.5 -> 36`, `37.5 -> 38`).
    ///
    /// This is what the training preprocessing used.
    #[default]
    HalfEven,
    /// Ties go away from zero (`36.5 -> 37`).
    HalfUp,
}

impl RoundingPolicy {
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::HalfEven => value.round_ties_even(),
            Self::HalfUp => value.round(),
        }
    }

    /// Rounds and converts to an integer. Non-finite input yields `0`.
    #[must_use]
    pub fn round_to_int(self, value: f64) -> i64 {
        if !value.is_finite() {
            return 0;
        }
        self.round(value) as i64
    }
}

/// Options for feature normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Rounding applied to every integer-valued slot.
    pub rounding: RoundingPolicy,

    /// Clamp age to [`PhysiologicalRange::AGE`](crate::PhysiologicalRange::AGE).
    /// Default: false, age is rounded but left unclamped.
    pub clamp_age: bool,

    /// Lowercase gender value that encodes as `1`.
    pub male_token: String,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            rounding: RoundingPolicy::default(),
            clamp_age: false,
            male_token: DEFAULT_MALE_TOKEN.to_string(),
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    #[must_use]
    pub fn with_clamp_age(mut self, enable: bool) -> Self {
        self.clamp_age = enable;
        self
    }

    #[must_use]
    pub fn with_male_token(mut self, token: impl Into<String>) -> Self {
        self.male_token = token.into().to_lowercase();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_even_matches_training_rounding() {
        let policy = RoundingPolicy::HalfEven;
        assert_eq!(policy.round_to_int(36.5), 36);
        assert_eq!(policy.round_to_int(37.5), 38);
        assert_eq!(policy.round_to_int(180.7), 181);
    }

    #[test]
    fn half_up_rounds_ties_away_from_zero() {
        let policy = RoundingPolicy::HalfUp;
        assert_eq!(policy.round_to_int(36.5), 37);
        assert_eq!(policy.round_to_int(-0.5), -1);
    }

    #[test]
    fn non_finite_rounds_to_zero() {
        assert_eq!(RoundingPolicy::HalfEven.round_to_int(f64::NAN), 0);
        assert_eq!(RoundingPolicy::HalfUp.round_to_int(f64::INFINITY), 0);
    }

    #[test]
    fn male_token_is_lowercased() {
        let options = NormalizationOptions::new().with_male_token("MALE");
        assert_eq!(options.male_token, "male");
    }
}
