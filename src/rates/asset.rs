//! Historical annual returns per asset class

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RateTable;
use crate::error::CalcError;

/// Investable asset category with its own return history
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    /// Equities (IDX Composite)
    Stocks,
    /// Bitcoin and altcoins
    Crypto,
    /// Gold, silver and other commodities
    Commodity,
}

impl AssetClass {
    pub const ALL: [AssetClass; 3] = [AssetClass::Stocks, AssetClass::Crypto, AssetClass::Commodity];

    /// Identifier used in data files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            AssetClass::Stocks => "stocks",
            AssetClass::Crypto => "crypto",
            AssetClass::Commodity => "commodity",
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Stocks => "Saham",
            AssetClass::Crypto => "Crypto",
            AssetClass::Commodity => "Komoditas",
        }
    }

    /// Instruments the class stands for
    pub fn description(&self) -> &'static str {
        match self {
            AssetClass::Stocks => "IDX Composite",
            AssetClass::Crypto => "Bitcoin & Altcoins",
            AssetClass::Commodity => "Emas, Perak, dll",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AssetClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stocks" | "stock" | "saham" => Ok(AssetClass::Stocks),
            "crypto" => Ok(AssetClass::Crypto),
            "commodity" | "commodities" | "komoditas" => Ok(AssetClass::Commodity),
            _ => Err(CalcError::UnknownAsset(s.to_string())),
        }
    }
}

/// Return tables keyed by asset class
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetReturns {
    tables: BTreeMap<AssetClass, RateTable>,
}

impl AssetReturns {
    pub fn new(tables: BTreeMap<AssetClass, RateTable>) -> Self {
        Self { tables }
    }

    /// Bundled 2010-2024 sample history
    pub fn default_history() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(
            AssetClass::Crypto,
            RateTable::from_annual(&[
                (2010, 1300.0),
                (2011, 1473.0),
                (2012, 186.0),
                (2013, 5507.0),
                (2014, -58.0),
                (2015, 35.0),
                (2016, 125.0),
                (2017, 1331.0),
                (2018, -72.0),
                (2019, 95.0),
                (2020, 302.0),
                (2021, 59.0),
                (2022, -65.0),
                (2023, 155.0),
                (2024, 58.0),
            ]),
        );
        tables.insert(
            AssetClass::Stocks,
            RateTable::from_annual(&[
                (2010, 46.13),
                (2011, 3.20),
                (2012, 12.94),
                (2013, -0.98),
                (2014, 22.29),
                (2015, -12.13),
                (2016, 15.32),
                (2017, 19.99),
                (2018, -2.54),
                (2019, 1.70),
                (2020, -5.09),
                (2021, 10.08),
                (2022, 4.09),
                (2023, 0.22),
                (2024, 2.21),
            ]),
        );
        tables.insert(
            AssetClass::Commodity,
            RateTable::from_annual(&[
                (2010, 29.76),
                (2011, 10.23),
                (2012, 7.14),
                (2013, -28.65),
                (2014, -1.72),
                (2015, -11.67),
                (2016, 8.56),
                (2017, 13.51),
                (2018, -1.94),
                (2019, 18.31),
                (2020, 24.81),
                (2021, -3.64),
                (2022, -0.28),
                (2023, 1.31),
                (2024, 14.12),
            ]),
        );
        Self { tables }
    }

    pub fn get(&self, asset: AssetClass) -> Option<&RateTable> {
        self.tables.get(&asset)
    }

    /// Table for `asset`, or an error naming the missing class
    pub fn require(&self, asset: AssetClass) -> Result<&RateTable, CalcError> {
        self.get(asset).ok_or(CalcError::MissingAssetTable(asset))
    }

    /// Asset classes that have a table
    pub fn classes(&self) -> impl Iterator<Item = AssetClass> + '_ {
        self.tables.keys().copied()
    }
}
