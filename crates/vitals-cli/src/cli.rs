//! CLI argument definitions for the vitals feature tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vitals",
    version,
    about = "Normalize hand-entered clinical vitals into model features",
    long_about = "Normalize hand-entered clinical vitals into the fixed-order feature vector\n\
                  used by the risk classifier.\n\n\
                  Feature order: gender_code, age, glucose_value, glucose_context,\n\
                  systolic, diastolic, spo2, temperature, heart_rate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw clinical values in log output.
    ///
    /// WARNING: values are patient data. Leave this off outside debugging.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble feature vectors from JSON records.
    Features(FeaturesArgs),

    /// List the physiological ranges used for clamping.
    Ranges(RangesArgs),
}

#[derive(Parser)]
pub struct RangesArgs {
    /// Only show these ranges (e.g. `glucose`, `spo2`, `age`).
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

#[derive(Parser)]
pub struct FeaturesArgs {
    /// JSON input: one record, an array of records, or JSON Lines.
    /// Reads stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Include the list of fallbacks and clamps for each record.
    #[arg(long = "report")]
    pub report: bool,

    /// Rounding applied to integer-valued features.
    #[arg(long = "round", value_enum, default_value = "half-even")]
    pub rounding: RoundingArg,

    /// Clamp age to 0-120 years like the other vitals.
    #[arg(long = "clamp-age")]
    pub clamp_age: bool,

    /// Gender value encoded as 1 (case-insensitive).
    #[arg(long = "male-token", value_name = "TOKEN")]
    pub male_token: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RoundingArg {
    HalfEven,
    HalfUp,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
