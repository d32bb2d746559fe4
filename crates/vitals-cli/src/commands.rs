use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use tracing::{info, info_span};

use vitals_cli::input::{parse_records, read_input};
use vitals_cli::output::to_json_line;
use vitals_cli::ranges::select_ranges;
use vitals_model::{NormalizationOptions, PhysiologicalRange, RoundingPolicy};
use vitals_normalization::FeatureAssembler;

use crate::cli::{FeaturesArgs, RangesArgs, RoundingArg};

/// Counts reported after a `features` run.
pub struct FeaturesResult {
    pub records: usize,
    pub with_issues: usize,
}

pub fn run_features(args: &FeaturesArgs) -> Result<FeaturesResult> {
    let span = info_span!("features");
    let _guard = span.enter();

    let options = options_from_args(args);
    let text = read_input(args.input.as_deref())?;
    let records = parse_records(&text)?;
    info!(records = records.len(), "read input");

    let assembler = FeatureAssembler::new(options);
    let assembled = assembler.assemble_batch(&records);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for item in &assembled {
        let line = to_json_line(item, args.report).context("serialize features")?;
        writeln!(out, "{line}").context("write output")?;
    }
    out.flush().context("write output")?;

    let with_issues = assembled.iter().filter(|item| item.has_issues()).count();
    info!(records = assembled.len(), with_issues, "assembled features");
    Ok(FeaturesResult {
        records: assembled.len(),
        with_issues,
    })
}

pub fn run_ranges(args: &RangesArgs) -> Result<()> {
    let ranges = select_ranges(&args.names)?;
    let mut table = Table::new();
    table.set_header(vec!["Measurement", "Unit", "Lower", "Upper"]);
    apply_table_style(&mut table);
    for range in ranges {
        let label = if range == PhysiologicalRange::AGE {
            format!("{} (--clamp-age)", range.name)
        } else {
            range.name.to_string()
        };
        table.add_row(range_row(&range, label));
    }
    println!("{table}");
    Ok(())
}

fn options_from_args(args: &FeaturesArgs) -> NormalizationOptions {
    let rounding = match args.rounding {
        RoundingArg::HalfEven => RoundingPolicy::HalfEven,
        RoundingArg::HalfUp => RoundingPolicy::HalfUp,
    };
    let mut options = NormalizationOptions::new()
        .with_rounding(rounding)
        .with_clamp_age(args.clamp_age);
    if let Some(token) = &args.male_token {
        options = options.with_male_token(token.as_str());
    }
    options
}

fn range_row(range: &PhysiologicalRange, label: String) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(range.unit),
        Cell::new(range.lower).set_alignment(CellAlignment::Right),
        Cell::new(range.upper).set_alignment(CellAlignment::Right),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
