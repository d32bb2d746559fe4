//! Feature assembly over a whole clinical record.

use serde::Serialize;
use tracing::{debug, trace};

use vitals_model::{
    BloodPressure, ClinicalRecord, FeatureSlot, FeatureVector, GlucoseReading,
    NormalizationOptions, PhysiologicalRange, RawValue,
};

use crate::blood_pressure::normalize_blood_pressure;
use crate::glucose::normalize_glucose;
use crate::issues::NormalizationIssue;
use crate::numeric::{COERCION_FALLBACK, try_coerce};
use crate::range::clamp_tracked;

/// A feature vector plus the normalized intermediate readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledFeatures {
    pub features: FeatureVector,
    pub glucose: GlucoseReading,
    pub blood_pressure: BloodPressure,
    pub issues: Vec<NormalizationIssue>,
}

impl AssembledFeatures {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn issues_for(&self, slot: FeatureSlot) -> impl Iterator<Item = &NormalizationIssue> {
        self.issues.iter().filter(move |issue| issue.slot == slot)
    }
}

/// Builds model features from records under a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct FeatureAssembler {
    options: NormalizationOptions,
}

impl FeatureAssembler {
    pub fn new(options: NormalizationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Assembles the 9-slot vector for `record`.
    pub fn assemble(&self, record: &ClinicalRecord) -> FeatureVector {
        self.assemble_with_report(record).features
    }

    /// Assembles the vector and reports every fallback and clamp applied.
    ///
    /// Assembly is total: every slot is always filled.
    pub fn assemble_with_report(&self, record: &ClinicalRecord) -> AssembledFeatures {
        let rounding = self.options.rounding;
        let mut issues = Vec::new();

        let gender_code = self.gender_code(record.gender.as_ref(), &mut issues);

        let age_range = self.options.clamp_age.then_some(PhysiologicalRange::AGE);
        let age = self.vital(record.age.as_ref(), FeatureSlot::Age, age_range, &mut issues);

        let glucose = normalize_glucose(record.glucose.as_ref(), rounding);
        issues.extend(glucose.issues);
        let glucose = glucose.value;

        let blood_pressure = normalize_blood_pressure(record.blood_pressure.as_ref(), rounding);
        issues.extend(blood_pressure.issues);
        let blood_pressure = blood_pressure.value;

        let spo2 = self.vital(
            record.spo2.as_ref(),
            FeatureSlot::Spo2,
            Some(PhysiologicalRange::SPO2),
            &mut issues,
        );
        let temperature = self.vital(
            record.temperature.as_ref(),
            FeatureSlot::Temperature,
            Some(PhysiologicalRange::TEMPERATURE),
            &mut issues,
        );
        let heart_rate = self.vital(
            record.heart_rate.as_ref(),
            FeatureSlot::HeartRate,
            Some(PhysiologicalRange::HEART_RATE),
            &mut issues,
        );

        let features = FeatureVector::new([
            gender_code,
            age,
            glucose.value as f64,
            f64::from(glucose.context.code()),
            blood_pressure.systolic as f64,
            blood_pressure.diastolic as f64,
            spo2,
            temperature,
            heart_rate,
        ]);

        if !issues.is_empty() {
            debug!(
                issue_count = issues.len(),
                clamped = issues.iter().filter(|issue| issue.is_clamp()).count(),
                "record normalized with substitutions"
            );
        }
        trace!(features = ?features.as_slice(), "assembled feature vector");

        AssembledFeatures {
            features,
            glucose,
            blood_pressure,
            issues,
        }
    }

    /// Assembles each record in order.
    pub fn assemble_batch(&self, records: &[ClinicalRecord]) -> Vec<AssembledFeatures> {
        records
            .iter()
            .map(|record| self.assemble_with_report(record))
            .collect()
    }

    /// `1` for the configured male token, `0` for anything else.
    fn gender_code(&self, raw: Option<&RawValue>, issues: &mut Vec<NormalizationIssue>) -> f64 {
        let Some(raw) = raw else {
            issues.push(NormalizationIssue::missing(FeatureSlot::GenderCode));
            return 0.0;
        };
        if raw.as_text().to_lowercase() == self.options.male_token.to_lowercase() {
            1.0
        } else {
            0.0
        }
    }

    /// Coerce, round to an integer, then clamp when a range applies.
    ///
    /// Without a range an infinite value falls back to `0`.
    fn vital(
        &self,
        raw: Option<&RawValue>,
        slot: FeatureSlot,
        range: Option<PhysiologicalRange>,
        issues: &mut Vec<NormalizationIssue>,
    ) -> f64 {
        let value = match raw.map(try_coerce) {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                debug!(slot = %slot, reason = %err, "vital coerced to {COERCION_FALLBACK}");
                issues.push(NormalizationIssue::fallback(slot, err));
                COERCION_FALLBACK
            }
            None => {
                issues.push(NormalizationIssue::missing(slot));
                COERCION_FALLBACK
            }
        };
        let rounded = self.options.rounding.round(value);
        match range {
            Some(range) => clamp_tracked(rounded, slot, &range, issues),
            None if !rounded.is_finite() => {
                debug!(slot = %slot, "unbounded vital coerced to {COERCION_FALLBACK}");
                issues.push(NormalizationIssue::fallback(slot, "infinite value"));
                COERCION_FALLBACK
            }
            None => rounded,
        }
    }
}

/// Assembles `record` with default options.
pub fn assemble(record: &ClinicalRecord) -> FeatureVector {
    FeatureAssembler::default().assemble(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueKind;
    use vitals_model::RoundingPolicy;

    #[test]
    fn gender_encoding_is_closed() {
        let assembler = FeatureAssembler::default();
        let code = |gender: &str| {
            assembler.assemble(&ClinicalRecord::new().with_gender(gender))[FeatureSlot::GenderCode]
        };
        assert_eq!(code("laki-laki"), 1.0);
        assert_eq!(code("LAKI-LAKI"), 1.0);
        assert_eq!(code("perempuan"), 0.0);
        assert_eq!(code(""), 0.0);
        assert_eq!(code("male"), 0.0);
    }

    #[test]
    fn custom_male_token() {
        let assembler =
            FeatureAssembler::new(NormalizationOptions::new().with_male_token("Male"));
        let record = ClinicalRecord::new().with_gender("MALE");
        assert_eq!(assembler.assemble(&record)[FeatureSlot::GenderCode], 1.0);
    }

    #[test]
    fn age_is_rounded_but_not_clamped_by_default() {
        let record = ClinicalRecord::new().with_age("150,4");
        assert_eq!(assemble(&record)[FeatureSlot::Age], 150.0);

        let clamping = FeatureAssembler::new(NormalizationOptions::new().with_clamp_age(true));
        assert_eq!(clamping.assemble(&record)[FeatureSlot::Age], 120.0);
    }

    #[test]
    fn vitals_round_before_clamping() {
        let record = ClinicalRecord::new()
            .with_temperature("42,4")
            .with_heart_rate(29.5)
            .with_spo2("97.5");
        let features = assemble(&record);
        assert_eq!(features[FeatureSlot::Temperature], 42.0);
        assert_eq!(features[FeatureSlot::HeartRate], 30.0);
        assert_eq!(features[FeatureSlot::Spo2], 98.0);
    }

    #[test]
    fn rounding_policy_applies_to_vitals() {
        let record = ClinicalRecord::new().with_temperature(36.5);
        assert_eq!(assemble(&record)[FeatureSlot::Temperature], 36.0);

        let half_up =
            FeatureAssembler::new(NormalizationOptions::new().with_rounding(RoundingPolicy::HalfUp));
        assert_eq!(half_up.assemble(&record)[FeatureSlot::Temperature], 37.0);
    }

    #[test]
    fn overflowing_vitals_saturate() {
        let record = ClinicalRecord::new()
            .with_temperature("1e999")
            .with_heart_rate("-1e400")
            .with_age("1e999");
        let report = FeatureAssembler::default().assemble_with_report(&record);
        assert_eq!(report.features[FeatureSlot::Temperature], 42.0);
        assert_eq!(report.features[FeatureSlot::HeartRate], 30.0);
        assert_eq!(report.features[FeatureSlot::Age], 0.0);
        let age: Vec<_> = report.issues_for(FeatureSlot::Age).collect();
        assert_eq!(
            age,
            vec![&NormalizationIssue::fallback(FeatureSlot::Age, "infinite value")]
        );

        let clamping = FeatureAssembler::new(NormalizationOptions::new().with_clamp_age(true));
        assert_eq!(clamping.assemble(&record)[FeatureSlot::Age], 120.0);
    }

    #[test]
    fn missing_vitals_clamp_to_lower_bound() {
        let features = assemble(&ClinicalRecord::default());
        assert_eq!(features[FeatureSlot::Spo2], 50.0);
        assert_eq!(features[FeatureSlot::Temperature], 33.0);
        assert_eq!(features[FeatureSlot::HeartRate], 30.0);
        assert_eq!(features[FeatureSlot::Age], 0.0);
    }

    #[test]
    fn report_lists_missing_and_clamped_slots() {
        let record = ClinicalRecord::new()
            .with_gender("laki-laki")
            .with_age(45.0)
            .with_heart_rate(250.0)
            .with_spo2("abc")
            .with_temperature(36.6)
            .with_glucose("150a")
            .with_blood_pressure("120/80");
        let report = FeatureAssembler::default().assemble_with_report(&record);

        let heart_rate: Vec<_> = report.issues_for(FeatureSlot::HeartRate).collect();
        assert_eq!(
            heart_rate,
            vec![&NormalizationIssue::clamped(FeatureSlot::HeartRate, 250.0, 200.0)]
        );
        let spo2: Vec<_> = report.issues_for(FeatureSlot::Spo2).collect();
        assert_eq!(spo2.len(), 2);
        assert!(matches!(spo2[0].kind, IssueKind::Fallback { .. }));
        assert!(spo2[1].is_clamp());
        assert_eq!(report.issues.len(), 3);
    }
}
