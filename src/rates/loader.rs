//! CSV-based rate table loader
//!
//! Loads rate tables from CSV files in data/rates/, and the month-granular
//! inflation export (`Periode,Inflasi` with decimal commas).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use super::{AssetClass, AssetReturns, MinimumWageTable, Period, RateEntry, RateTable, RegionalWage};
use crate::error::RateLoadError;
use crate::format::parse_localized_decimal;

/// Default path to rates directory
pub const DEFAULT_RATES_PATH: &str = "data/rates";

pub const INFLATION_FILE: &str = "inflation.csv";
pub const ASSET_RETURNS_FILE: &str = "asset_returns.csv";
pub const MINIMUM_WAGE_FILE: &str = "minimum_wage.csv";

fn open(path: &Path) -> Result<File, RateLoadError> {
    File::open(path).map_err(|source| RateLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn line_of(record: &StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}

fn cell<'r>(record: &'r StringRecord, idx: usize, column: &str) -> Result<&'r str, RateLoadError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| RateLoadError::MissingColumn {
            row: line_of(record),
            column: column.to_string(),
        })
}

fn number(record: &StringRecord, idx: usize, column: &str) -> Result<f64, RateLoadError> {
    let value = cell(record, idx, column)?;
    parse_localized_decimal(value).ok_or_else(|| RateLoadError::InvalidNumber {
        row: line_of(record),
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Load an annual `year,rate` table
pub fn load_annual_table<R: Read>(reader: R) -> Result<RateTable, RateLoadError> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = Vec::new();

    for result in reader.records() {
        let record = result?;
        let period: Period = cell(&record, 0, "year")?.parse()?;
        let rate = number(&record, 1, "rate")?;
        entries.push(RateEntry::new(period, rate));
    }
    if entries.is_empty() {
        return Err(RateLoadError::EmptyTable("annual rate table"));
    }

    RateTable::try_from_entries(entries)
}

/// Load per-asset returns from a `year,<asset>,<asset>...` table
///
/// Columns are matched to asset classes by header name. Empty cells are gaps.
pub fn load_asset_returns<R: Read>(reader: R) -> Result<AssetReturns, RateLoadError> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut columns = Vec::new();
    for name in headers.iter().skip(1) {
        let asset: AssetClass = name
            .parse()
            .map_err(|_| RateLoadError::UnknownAsset(name.to_string()))?;
        columns.push(asset);
    }

    let mut entries: BTreeMap<AssetClass, Vec<RateEntry>> =
        columns.iter().map(|&asset| (asset, Vec::new())).collect();

    for result in reader.records() {
        let record = result?;
        let period: Period = cell(&record, 0, "year")?.parse()?;
        for (i, asset) in columns.iter().enumerate() {
            let raw = record.get(i + 1).map(str::trim).unwrap_or("");
            if raw.is_empty() {
                continue;
            }
            let rate = number(&record, i + 1, asset.key())?;
            if let Some(list) = entries.get_mut(asset) {
                list.push(RateEntry::new(period, rate));
            }
        }
    }

    let mut tables = BTreeMap::new();
    for (asset, list) in entries {
        tables.insert(asset, RateTable::try_from_entries(list)?);
    }
    Ok(AssetReturns::new(tables))
}

/// Load a `region,amount` minimum wage table
pub fn load_minimum_wages<R: Read>(reader: R) -> Result<MinimumWageTable, RateLoadError> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut wages = Vec::new();

    for result in reader.records() {
        let record = result?;
        let region = cell(&record, 0, "region")?.to_string();
        let amount = number(&record, 1, "amount")?;
        wages.push(RegionalWage { region, amount });
    }

    MinimumWageTable::try_from_wages(wages)
}

/// Load the monthly inflation export: header row, then `YYYY-MM,rate` rows
///
/// The delimiter is `;` when the header contains one, otherwise `,` (a decimal
/// comma must then be quoted). Rows with an empty period are skipped.
pub fn load_monthly_inflation<R: Read>(mut reader: R) -> Result<RateTable, RateLoadError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| RateLoadError::Csv(e.into()))?;

    let header = content.lines().next().unwrap_or("");
    let delimiter = if header.contains(';') { b';' } else { b',' };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        let period = record.get(0).unwrap_or("");
        if period.is_empty() {
            warn!("skipping monthly inflation row {} without a period", line_of(&record));
            continue;
        }
        let period: Period = period.parse()?;
        let rate = number(&record, 1, "inflasi")?;
        entries.push(RateEntry::new(period, rate));
    }
    if entries.is_empty() {
        return Err(RateLoadError::EmptyTable("monthly inflation export"));
    }

    let table = RateTable::try_from_entries(entries)?;
    debug!(
        "loaded {} monthly inflation records, latest {:?}",
        table.len(),
        table.latest_period()
    );
    Ok(table)
}

/// Load the monthly inflation export from a file
pub fn load_monthly_inflation_file(path: &Path) -> Result<RateTable, RateLoadError> {
    load_monthly_inflation(open(path)?)
}

/// All tables loaded from one rates directory
#[derive(Debug, Clone)]
pub struct LoadedRates {
    pub inflation: RateTable,
    pub asset_returns: AssetReturns,
    pub minimum_wages: MinimumWageTable,
}

impl LoadedRates {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, RateLoadError> {
        Self::load_from(Path::new(DEFAULT_RATES_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self, RateLoadError> {
        let loaded = Self {
            inflation: load_annual_table(open(&path.join(INFLATION_FILE))?)?,
            asset_returns: load_asset_returns(open(&path.join(ASSET_RETURNS_FILE))?)?,
            minimum_wages: load_minimum_wages(open(&path.join(MINIMUM_WAGE_FILE))?)?,
        };
        debug!(
            "loaded rates from {}: {} inflation years, {} wage regions",
            path.display(),
            loaded.inflation.len(),
            loaded.minimum_wages.len()
        );
        Ok(loaded)
    }
}
