//! CLI library components for the vitals feature tool.

pub mod input;
pub mod logging;
pub mod output;
pub mod ranges;
