//! Historical investment growth per asset class

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::compounding::{CompoundingRequest, CompoundingResult};
use crate::error::CalcError;
use crate::rates::{AssetClass, AssetReturns, Period};

/// Compound `initial_amount` through `asset` returns for `from_year <= year <= to_year`
///
/// The end year's return is included, unlike the inflation adjustment.
pub fn investment_growth(
    returns: &AssetReturns,
    initial_amount: f64,
    asset: AssetClass,
    from_year: i32,
    to_year: i32,
) -> Result<CompoundingResult, CalcError> {
    let table = returns.require(asset)?;
    Ok(CompoundingRequest::inclusive(table, initial_amount, from_year, to_year).run())
}

/// Final value of [`investment_growth`]
pub fn investment_return(
    returns: &AssetReturns,
    initial_amount: f64,
    asset: AssetClass,
    from_year: i32,
    to_year: i32,
) -> Result<f64, CalcError> {
    investment_growth(returns, initial_amount, asset, from_year, to_year).map(|r| r.final_value)
}

/// Growth of one asset class over the comparison window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetOutcome {
    pub asset: AssetClass,
    pub final_value: f64,
    /// Total return in percent
    pub percentage_return: f64,
    pub applied: CompoundingResult,
}

/// Same initial amount invested in several asset classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentComparison {
    pub initial_amount: f64,
    pub start_year: i32,
    pub end_year: i32,
    pub year_difference: i32,
    pub outcomes: Vec<AssetOutcome>,
}

impl InvestmentComparison {
    /// Run every selected asset from `start_year` through `end_year` inclusive
    pub fn new(
        returns: &AssetReturns,
        initial_amount: f64,
        assets: &[AssetClass],
        start_year: i32,
        end_year: i32,
    ) -> Result<Self, CalcError> {
        if assets.is_empty() {
            return Err(CalcError::NoAssetsSelected);
        }

        let mut outcomes = Vec::with_capacity(assets.len());
        for &asset in assets {
            if outcomes.iter().any(|o: &AssetOutcome| o.asset == asset) {
                continue;
            }
            let applied = investment_growth(returns, initial_amount, asset, start_year, end_year)?;
            outcomes.push(AssetOutcome {
                asset,
                final_value: applied.final_value,
                percentage_return: applied.percentage_change(),
                applied,
            });
        }

        Ok(Self {
            initial_amount,
            start_year,
            end_year,
            year_difference: end_year - start_year,
            outcomes,
        })
    }

    /// Asset with the highest return; ties keep the earlier selection
    pub fn best(&self) -> Option<&AssetOutcome> {
        self.outcomes.iter().fold(None, |best: Option<&AssetOutcome>, o| match best {
            Some(b) if b.percentage_return >= o.percentage_return => Some(b),
            _ => Some(o),
        })
    }

    pub fn get(&self, asset: AssetClass) -> Option<&AssetOutcome> {
        self.outcomes.iter().find(|o| o.asset == asset)
    }
}

/// One asset's recorded return for a year, if any
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetYearReturn {
    pub asset: AssetClass,
    pub rate: Option<f64>,
}

/// Side-by-side returns of the selected assets for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyReturns {
    pub year: i32,
    pub returns: Vec<AssetYearReturn>,
}

/// Per-year return rows for `from_year <= year < to_year`, ascending
///
/// Covers every year present in any selected asset's table.
pub fn yearly_returns(
    returns: &AssetReturns,
    assets: &[AssetClass],
    from_year: i32,
    to_year: i32,
) -> Result<Vec<YearlyReturns>, CalcError> {
    let tables = assets
        .iter()
        .map(|&asset| returns.require(asset).map(|table| (asset, table)))
        .collect::<Result<Vec<_>, _>>()?;

    let years: BTreeSet<i32> = tables
        .iter()
        .flat_map(|(_, table)| table.years())
        .filter(|&year| year >= from_year && year < to_year)
        .collect();

    Ok(years
        .into_iter()
        .map(|year| YearlyReturns {
            year,
            returns: tables
                .iter()
                .map(|(asset, table)| AssetYearReturn {
                    asset: *asset,
                    rate: table.get(Period::year(year)),
                })
                .collect(),
        })
        .collect())
}
