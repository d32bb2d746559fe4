//! Medical plausibility limits for vital signs.

use serde::Serialize;

/// A named physiological range in the measurement's natural unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysiologicalRange {
    pub name: &'static str,
    pub unit: &'static str,
    pub lower: f64,
    pub upper: f64,
}

impl PhysiologicalRange {
    /// Body temperature in degrees Celsius.
    pub const TEMPERATURE: Self = Self::new("temperature", "°C", 33.0, 42.0);
    /// Peripheral oxygen saturation in percent.
    pub const SPO2: Self = Self::new("spo2", "%", 50.0, 100.0);
    /// Heart rate in beats per minute.
    pub const HEART_RATE: Self = Self::new("heart_rate", "bpm", 30.0, 200.0);
    /// Blood glucose in mg/dL.
    pub const GLUCOSE: Self = Self::new("glucose", "mg/dL", 40.0, 500.0);
    /// Systolic blood pressure in mmHg.
    pub const SYSTOLIC: Self = Self::new("systolic", "mmHg", 70.0, 250.0);
    /// Diastolic blood pressure in mmHg.
    pub const DIASTOLIC: Self = Self::new("diastolic", "mmHg", 40.0, 150.0);
    /// Age in years. Only applied when age clamping is switched on, so it is
    /// not part of [`ALL`](Self::ALL).
    pub const AGE: Self = Self::new("age", "years", 0.0, 120.0);

    pub const ALL: [Self; 6] = [
        Self::TEMPERATURE,
        Self::SPO2,
        Self::HEART_RATE,
        Self::GLUCOSE,
        Self::SYSTOLIC,
        Self::DIASTOLIC,
    ];

    const fn new(name: &'static str, unit: &'static str, lower: f64, upper: f64) -> Self {
        Self {
            name,
            unit,
            lower,
            upper,
        }
    }

    /// Looks up a range by its name (case-insensitive), including [`AGE`](Self::AGE).
    pub fn by_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .chain([Self::AGE])
            .find(|range| range.name.eq_ignore_ascii_case(name))
    }

    /// Restricts `value` to `[lower, upper]`.
    ///
    /// NaN is treated as unparsable and maps to `lower`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.lower;
        }
        value.min(self.upper).max(self.lower)
    }

    /// Like [`clamp`](Self::clamp), with a missing value mapping to `lower`.
    #[must_use]
    pub fn clamp_opt(&self, value: Option<f64>) -> f64 {
        value.map_or(self.lower, |v| self.clamp(v))
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_ordered() {
        for range in PhysiologicalRange::ALL {
            assert!(range.lower < range.upper, "{}", range.name);
        }
    }

    #[test]
    fn clamp_limits_both_ends() {
        assert_eq!(PhysiologicalRange::HEART_RATE.clamp(250.0), 200.0);
        assert_eq!(PhysiologicalRange::SPO2.clamp(10.0), 50.0);
        assert_eq!(PhysiologicalRange::TEMPERATURE.clamp(36.6), 36.6);
    }

    #[test]
    fn unparsable_maps_to_lower_bound() {
        assert_eq!(PhysiologicalRange::GLUCOSE.clamp(f64::NAN), 40.0);
        assert_eq!(PhysiologicalRange::SYSTOLIC.clamp_opt(None), 70.0);
        assert_eq!(PhysiologicalRange::DIASTOLIC.clamp(f64::INFINITY), 150.0);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(
            PhysiologicalRange::by_name(" SpO2 "),
            Some(PhysiologicalRange::SPO2)
        );
        assert_eq!(
            PhysiologicalRange::by_name("age"),
            Some(PhysiologicalRange::AGE)
        );
        assert_eq!(PhysiologicalRange::by_name("weight"), None);
    }
}
