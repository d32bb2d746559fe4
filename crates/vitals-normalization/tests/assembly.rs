//! End-to-end feature assembly over realistic records.

use vitals_model::{
    BloodPressure, ClinicalRecord, FEATURE_COUNT, FeatureSlot, GlucoseContext, GlucoseReading,
    NormalizationOptions, RoundingPolicy,
};
use vitals_normalization::{FeatureAssembler, assemble};

fn record_from_json(json: &str) -> ClinicalRecord {
    serde_json::from_str(json).expect("deserialize record")
}

#[test]
fn typical_record_matches_training_layout() {
    let record = record_from_json(
        r#"{
            "gender": "laki-laki",
            "age": 45,
            "heart_rate": 72,
            "spo2": 98,
            "temperature": 36.5,
            "glucose": "150a",
            "blood_pressure": "120/80"
        }"#,
    );
    let features = assemble(&record);
    assert_eq!(
        features.as_slice(),
        &[1.0, 45.0, 150.0, 1.0, 120.0, 80.0, 98.0, 36.0, 72.0]
    );
}

#[test]
fn half_up_policy_rounds_temperature_up() {
    let record = record_from_json(r#"{"temperature": "36,5"}"#);
    let assembler =
        FeatureAssembler::new(NormalizationOptions::new().with_rounding(RoundingPolicy::HalfUp));
    assert_eq!(assembler.assemble(&record)[FeatureSlot::Temperature], 37.0);
}

#[test]
fn malformed_glucose_and_blood_pressure_do_not_fail() {
    let record = record_from_json(
        r#"{
            "gender": "perempuan",
            "age": "60",
            "heart_rate": "88",
            "spo2": "95%",
            "temperature": "37,2",
            "glucose": "abc",
            "blood_pressure": "bad"
        }"#,
    );
    let report = FeatureAssembler::default().assemble_with_report(&record);

    assert_eq!(report.glucose, GlucoseReading::new(0, GlucoseContext::Fasting));
    assert_eq!(report.blood_pressure, BloodPressure::MISSING);
    assert_eq!(
        report.features.as_slice(),
        &[0.0, 60.0, 0.0, 1.0, 0.0, 0.0, 95.0, 37.0, 88.0]
    );
    assert_eq!(report.issues_for(FeatureSlot::GlucoseValue).count(), 1);
    assert_eq!(report.issues_for(FeatureSlot::Systolic).count(), 1);
    assert_eq!(report.issues_for(FeatureSlot::Diastolic).count(), 1);
}

#[test]
fn post_prandial_decimal_comma_glucose() {
    let record = record_from_json(r#"{"glucose": "180,7b", "blood_pressure": "140/90"}"#);
    let features = assemble(&record);
    assert_eq!(features[FeatureSlot::GlucoseValue], 181.0);
    assert_eq!(features[FeatureSlot::GlucoseContext], 2.0);
    assert_eq!(features[FeatureSlot::Systolic], 140.0);
    assert_eq!(features[FeatureSlot::Diastolic], 90.0);
}

#[test]
fn empty_record_still_fills_every_slot() {
    let report = FeatureAssembler::default().assemble_with_report(&ClinicalRecord::default());
    assert_eq!(report.features.len(), FEATURE_COUNT);
    assert_eq!(
        report.features.as_slice(),
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 50.0, 33.0, 30.0]
    );
    insta::assert_json_snapshot!(report.issues, @r#"
    [
      {
        "slot": "gender_code",
        "kind": "missing"
      },
      {
        "slot": "age",
        "kind": "missing"
      },
      {
        "slot": "glucose_value",
        "kind": "missing"
      },
      {
        "slot": "systolic",
        "kind": "missing"
      },
      {
        "slot": "diastolic",
        "kind": "missing"
      },
      {
        "slot": "spo2",
        "kind": "missing"
      },
      {
        "slot": "spo2",
        "kind": "clamped",
        "original": 0.0,
        "clamped": 50.0
      },
      {
        "slot": "temperature",
        "kind": "missing"
      },
      {
        "slot": "temperature",
        "kind": "clamped",
        "original": 0.0,
        "clamped": 33.0
      },
      {
        "slot": "heart_rate",
        "kind": "missing"
      },
      {
        "slot": "heart_rate",
        "kind": "clamped",
        "original": 0.0,
        "clamped": 30.0
      }
    ]
    "#);
}

#[test]
fn batch_preserves_input_order() {
    let records: Vec<ClinicalRecord> = serde_json::from_str(
        r#"[
            {"glucose": "150a"},
            {"glucose": "200b"},
            {"glucose": "999a"}
        ]"#,
    )
    .expect("deserialize records");
    let values: Vec<(i64, u8)> = FeatureAssembler::default()
        .assemble_batch(&records)
        .iter()
        .map(|assembled| (assembled.glucose.value, assembled.glucose.context.code()))
        .collect();
    assert_eq!(values, vec![(150, 1), (200, 2), (500, 1)]);
}
