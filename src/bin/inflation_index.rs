//! Write a cumulative price index from the inflation table
//!
//! The index is 100 at the start of the first year and compounds each year's
//! (or month's) rate, so `index / 100` is what 1 Rupiah from the first period
//! costs after that period.
//!
//! Usage: cargo run --bin inflation_index -- [--rates-dir data/rates] [--output inflation_index.csv]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use berapa_nanti::rates::loader::load_monthly_inflation_file;
use berapa_nanti::{CompoundingResult, RateBook};

#[derive(Debug, Parser)]
struct Args {
    /// Rates directory; bundled data when omitted
    #[arg(long)]
    rates_dir: Option<PathBuf>,

    /// Monthly inflation export to index instead of the annual table
    #[arg(long)]
    monthly_inflation: Option<PathBuf>,

    #[arg(long, default_value = "inflation_index.csv")]
    output: PathBuf,
}

#[derive(Debug, Serialize)]
struct IndexRow {
    period: String,
    rate: f64,
    index: f64,
    cumulative_pct: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let book = match &args.rates_dir {
        Some(dir) => RateBook::from_csv_path(dir)
            .with_context(|| format!("loading rate tables from {}", dir.display()))?,
        None => RateBook::builtin(),
    };
    let inflation = match &args.monthly_inflation {
        Some(path) => load_monthly_inflation_file(path)
            .with_context(|| format!("loading monthly inflation from {}", path.display()))?,
        None => book.inflation,
    };

    let entries: Vec<_> = inflation.entries().collect();
    let result = CompoundingResult::from_entries(100.0, &entries);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for step in &result.periods_applied {
        writer.serialize(IndexRow {
            period: step.period.to_string(),
            rate: step.rate,
            index: step.value_after,
            cumulative_pct: step.value_after - 100.0,
        })?;
    }
    writer.flush()?;

    println!(
        "Wrote {} periods to {} (final index {:.2})",
        result.periods_applied.len(),
        args.output.display(),
        result.final_value
    );
    Ok(())
}
