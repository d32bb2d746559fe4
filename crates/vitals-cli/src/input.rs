//! Reading clinical records from JSON input.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Deserializer;

use vitals_model::ClinicalRecord;

/// Reads the whole input, from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("read stdin")?;
            Ok(buffer)
        }
    }
}

/// Parses records from a JSON array, a single object, or a stream of
/// whitespace-separated objects (JSON Lines).
pub fn parse_records(text: &str) -> Result<Vec<ClinicalRecord>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).context("parse record array");
    }
    Deserializer::from_str(text)
        .into_iter::<ClinicalRecord>()
        .enumerate()
        .map(|(idx, record)| record.with_context(|| format!("parse record {}", idx + 1)))
        .collect()
}
