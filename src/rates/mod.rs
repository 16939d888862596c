//! Rate data: inflation history, asset returns and minimum wages

mod asset;
mod table;
mod wage;
pub mod loader;

pub use asset::{AssetClass, AssetReturns};
pub use loader::LoadedRates;
pub use table::{Period, RateEntry, RateTable, UpperBound};
pub use wage::{MinimumWageTable, RegionalWage};

use std::path::Path;

use log::debug;

use crate::error::RateLoadError;

/// Container for every table a calculation may need
///
/// Built once per session and only read afterwards.
#[derive(Debug, Clone)]
pub struct RateBook {
    /// General inflation, annual or month-granular
    pub inflation: RateTable,
    pub asset_returns: AssetReturns,
    pub minimum_wages: MinimumWageTable,
}

impl RateBook {
    /// Bundled sample data (Indonesia, 2010-2024)
    pub fn builtin() -> Self {
        Self {
            inflation: Self::default_inflation(),
            asset_returns: AssetReturns::default_history(),
            minimum_wages: MinimumWageTable::default_2024(),
        }
    }

    /// Annual consumer price inflation 2010-2024
    pub fn default_inflation() -> RateTable {
        RateTable::from_annual(&[
            (2010, 5.13),
            (2011, 5.38),
            (2012, 4.28),
            (2013, 6.97),
            (2014, 6.42),
            (2015, 6.38),
            (2016, 3.53),
            (2017, 3.81),
            (2018, 3.20),
            (2019, 2.72),
            (2020, 1.68),
            (2021, 1.87),
            (2022, 5.47),
            (2023, 3.35),
            (2024, 2.84), // current year estimate
        ])
    }

    /// Load tables from CSV files in the default location (data/rates/)
    pub fn from_csv() -> Result<Self, RateLoadError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_RATES_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, RateLoadError> {
        let loaded = LoadedRates::load_from(path)?;
        Ok(Self::from_loaded(loaded))
    }

    pub fn from_loaded(loaded: LoadedRates) -> Self {
        Self {
            inflation: loaded.inflation,
            asset_returns: loaded.asset_returns,
            minimum_wages: loaded.minimum_wages,
        }
    }

    /// Replace the inflation table, e.g. with a monthly export loaded at startup
    pub fn with_inflation(mut self, inflation: RateTable) -> Self {
        debug!(
            "using inflation table with {} entries (monthly: {})",
            inflation.len(),
            inflation.is_monthly()
        );
        self.inflation = inflation;
        self
    }
}

impl Default for RateBook {
    fn default() -> Self {
        Self::builtin()
    }
}
