pub mod error;
pub mod features;
pub mod options;
pub mod range;
pub mod reading;
pub mod record;

pub use error::{Result, VitalsError};
pub use features::{FEATURE_COUNT, FeatureSlot, FeatureVector};
pub use options::{DEFAULT_MALE_TOKEN, NormalizationOptions, RoundingPolicy};
pub use range::PhysiologicalRange;
pub use reading::{BloodPressure, GlucoseContext, GlucoseReading};
pub use record::{ClinicalRecord, RawValue};
