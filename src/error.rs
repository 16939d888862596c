//! Error types
//!
//! Loading rate data and validating user input can fail; the compounding
//! engine itself never does.

use std::path::PathBuf;

use thiserror::Error;

use crate::rates::{AssetClass, Period};

/// Failure while reading an external rate table
#[derive(Error, Debug)]
pub enum RateLoadError {
    #[error("unable to open rate file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid period {0:?}, expected YYYY or YYYY-MM")]
    InvalidPeriod(String),

    #[error("row {row}: invalid number {value:?} in column {column}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: missing column {column}")]
    MissingColumn { row: usize, column: String },

    #[error("duplicate period {0} in rate table")]
    DuplicatePeriod(Period),

    #[error("rate file {0} has no data rows")]
    EmptyTable(&'static str),

    #[error("duplicate region {0:?} in minimum wage table")]
    DuplicateRegion(String),

    #[error("unknown asset column {0:?}")]
    UnknownAsset(String),
}

/// A calculation that cannot run because required data is absent
#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("no return table loaded for asset class {0}")]
    MissingAssetTable(AssetClass),

    #[error("inflation table is empty")]
    EmptyInflationTable,

    #[error("no minimum wage recorded for region {0:?}")]
    UnknownRegion(String),

    #[error("minimum wage table is empty")]
    EmptyWageTable,

    #[error("select at least one asset class")]
    NoAssetsSelected,

    #[error("unknown asset class {0:?}, expected stocks, crypto or commodity")]
    UnknownAsset(String),

    #[error("unknown life goal {0:?}")]
    UnknownGoal(String),

    #[error("unknown inflation scenario {0:?}, expected low, medium or high")]
    UnknownScenario(String),
}

/// User input rejected before any calculation runs
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("years must be between 1 and {max}, got {value}")]
    YearsOutOfRange { value: u32, max: u32 },

    #[error("rate must be between {min}% and {max}%, got {value}%")]
    RateOutOfRange { value: f64, min: f64, max: f64 },

    #[error("year must be between {min} and {max}, got {value}")]
    YearOutOfRange { value: i32, min: i32, max: i32 },
}
