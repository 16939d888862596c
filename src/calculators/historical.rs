//! What a past amount is worth today after inflation

use serde::{Deserialize, Serialize};

use crate::compounding::{CompoundingRequest, CompoundingResult};
use crate::rates::RateTable;

/// Compound `value` through the inflation rates of `from_year <= year < to_year`
///
/// Years missing from the table contribute 0%. An empty or inverted range
/// returns `value` unchanged.
pub fn historical_adjustment(
    inflation: &RateTable,
    value: f64,
    from_year: i32,
    to_year: i32,
) -> CompoundingResult {
    CompoundingRequest::exclusive(inflation, value, from_year, to_year).run()
}

/// Final value of [`historical_adjustment`]
pub fn historical_adjusted_value(inflation: &RateTable, value: f64, from_year: i32, to_year: i32) -> f64 {
    historical_adjustment(inflation, value, from_year, to_year).final_value
}

/// A historical amount restated in present-day money
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalValue {
    pub original_value: f64,
    pub from_year: i32,
    pub to_year: i32,
    pub current_value: f64,
    pub year_difference: i32,
    /// Cumulative inflation over the range, in percent
    pub percentage_change: f64,
    pub applied: CompoundingResult,
}

impl HistoricalValue {
    pub fn new(inflation: &RateTable, value: f64, from_year: i32, to_year: i32) -> Self {
        let applied = historical_adjustment(inflation, value, from_year, to_year);
        Self {
            original_value: value,
            from_year,
            to_year,
            current_value: applied.final_value,
            year_difference: to_year - from_year,
            percentage_change: applied.percentage_change(),
            applied,
        }
    }

    /// Purchasing power lost to inflation, in present-day money
    pub fn value_difference(&self) -> f64 {
        self.current_value - self.original_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compounding::compound;
    use crate::rates::{Period, RateBook};
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_length_range_is_identity() {
        let table = RateBook::default_inflation();
        for year in [2005, 2010, 2017, 2024, 2030] {
            assert_eq!(historical_adjusted_value(&table, 1_000_000.0, year, year), 1_000_000.0);
        }
    }

    #[test]
    fn test_sample_inflation_2010_to_2015() {
        let table = RateBook::default_inflation();
        let adjusted = historical_adjusted_value(&table, 1_000_000.0, 2010, 2015);
        let expected = compound(1_000_000.0, [5.13, 5.38, 4.28, 6.97, 6.42]);
        assert_relative_eq!(adjusted, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_range_without_entries_returns_value() {
        let table = RateBook::default_inflation();
        assert_eq!(historical_adjusted_value(&table, 500.0, 1990, 2000), 500.0);
    }

    #[test]
    fn test_gap_equals_explicit_zero() {
        let gapped = RateTable::from_annual(&[(2010, 5.13), (2011, 5.38), (2013, 6.97), (2014, 6.42)]);
        let filled = gapped.clone().with_entry(Period::year(2012), 0.0);

        let a = historical_adjusted_value(&gapped, 1_000_000.0, 2010, 2015);
        let b = historical_adjusted_value(&filled, 1_000_000.0, 2010, 2015);
        assert_eq!(a, b);
    }

    #[test]
    fn test_upper_year_excluded() {
        let table = RateBook::default_inflation();
        let result = historical_adjustment(&table, 100.0, 2022, 2024);
        assert_eq!(result.periods_applied.len(), 2);
        assert_eq!(result.periods_applied[1].period, Period::year(2023));
    }

    #[test]
    fn test_monthly_table_compounds_every_record() {
        let monthly = RateTable::new()
            .with_entry(Period::monthly(2024, 1), 2.0)
            .with_entry(Period::monthly(2024, 2), 2.0)
            .with_entry(Period::monthly(2024, 3), 2.0);
        let adjusted = historical_adjusted_value(&monthly, 100.0, 2024, 2025);
        assert_relative_eq!(adjusted, 100.0 * 1.02_f64.powi(3), max_relative = 1e-12);

        let annual = historical_adjusted_value(&monthly.collapse_to_annual(), 100.0, 2024, 2025);
        assert_relative_eq!(annual, 102.0, max_relative = 1e-12);
    }

    #[test]
    fn test_historical_value_report() {
        let table = RateBook::default_inflation();
        let report = HistoricalValue::new(&table, 1_000_000.0, 2020, 2025);

        assert_eq!(report.year_difference, 5);
        assert_eq!(report.applied.periods_applied.len(), 5);
        let expected = compound(1_000_000.0, [1.68, 1.87, 5.47, 3.35, 2.84]);
        assert_relative_eq!(report.current_value, expected, max_relative = 1e-12);
        assert_relative_eq!(
            report.percentage_change,
            (expected / 1_000_000.0 - 1.0) * 100.0,
            max_relative = 1e-9
        );
        assert!(report.value_difference() > 0.0);
    }
}
