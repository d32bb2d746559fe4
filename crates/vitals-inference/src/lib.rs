//! Scaler and classifier boundary for vitals risk prediction.
//!
//! The scaler and model are external, pre-fitted collaborators exposed
//! through the [`Scaler`] and [`Model`] ports. [`InferenceContext`] bundles
//! them with the normalization options and is shared read-only between
//! concurrent callers.

pub mod context;
pub mod error;
pub mod ports;
pub mod response;
pub mod scaler;

pub use context::InferenceContext;
pub use error::{InferenceError, Result};
pub use ports::{Model, Scaler};
pub use response::{ErrorResponse, Prediction, PredictionOutcome};
pub use scaler::StandardScaler;
