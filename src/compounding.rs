//! Sequential multiplicative compounding
//!
//! Every calculator reduces to one primitive: start from a value and multiply
//! by `1 + rate / 100` for each rate, in order. The engine never validates or
//! errors. Non-finite inputs propagate through IEEE-754 arithmetic, and rates
//! below -100% are applied as given (the value turns negative).

use serde::{Deserialize, Serialize};

use crate::rates::{Period, RateEntry, RateTable, UpperBound};

/// Growth factor for one period at `rate_percent`
#[inline]
pub fn growth_factor(rate_percent: f64) -> f64 {
    1.0 + rate_percent / 100.0
}

/// Compound `principal` through `rates`, applied in iteration order
///
/// An empty sequence returns `principal` unchanged.
pub fn compound<I>(principal: f64, rates: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    rates
        .into_iter()
        .fold(principal, |value, rate| value * growth_factor(rate))
}

/// Compound at one flat rate for `periods` periods
///
/// Multiplies step by step rather than using `powi` so results match the
/// table-driven path bit for bit.
pub fn compound_flat(principal: f64, periods: u32, rate_percent: f64) -> f64 {
    compound(principal, std::iter::repeat(rate_percent).take(periods as usize))
}

/// One period that contributed to a result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedRate {
    pub period: Period,
    pub rate: f64,
    /// Value after this period's rate was applied
    pub value_after: f64,
}

/// Outcome of a table-driven compounding run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundingResult {
    pub principal: f64,
    pub final_value: f64,
    /// Periods applied, in order
    pub periods_applied: Vec<AppliedRate>,
}

impl CompoundingResult {
    /// Fold a resolved rate sequence, recording each step
    pub fn from_entries(principal: f64, entries: &[RateEntry]) -> Self {
        let mut value = principal;
        let periods_applied = entries
            .iter()
            .map(|entry| {
                value *= growth_factor(entry.rate);
                AppliedRate {
                    period: entry.period,
                    rate: entry.rate,
                    value_after: value,
                }
            })
            .collect();

        Self {
            principal,
            final_value: value,
            periods_applied,
        }
    }

    /// Total change as a percentage of the principal
    pub fn percentage_change(&self) -> f64 {
        (self.final_value / self.principal - 1.0) * 100.0
    }

    /// Rates used, in application order
    pub fn rates(&self) -> Vec<f64> {
        self.periods_applied.iter().map(|p| p.rate).collect()
    }
}

/// Compound a principal over a year range of a rate table
#[derive(Debug, Clone, Copy)]
pub struct CompoundingRequest<'a> {
    pub principal: f64,
    pub from_year: i32,
    pub to_year: i32,
    pub upper: UpperBound,
    pub table: &'a RateTable,
}

impl<'a> CompoundingRequest<'a> {
    /// Range `from_year <= year < to_year`
    pub fn exclusive(table: &'a RateTable, principal: f64, from_year: i32, to_year: i32) -> Self {
        Self {
            principal,
            from_year,
            to_year,
            upper: UpperBound::Exclusive,
            table,
        }
    }

    /// Range `from_year <= year <= to_year`
    pub fn inclusive(table: &'a RateTable, principal: f64, from_year: i32, to_year: i32) -> Self {
        Self {
            principal,
            from_year,
            to_year,
            upper: UpperBound::Inclusive,
            table,
        }
    }

    /// Resolve the table slice and compound through it
    ///
    /// Only periods present in the table are applied; absent years contribute
    /// nothing, the same as an explicit 0% entry.
    pub fn run(&self) -> CompoundingResult {
        let entries = self
            .table
            .years_in_range(self.from_year, self.to_year, self.upper);
        CompoundingResult::from_entries(self.principal, &entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_sequence_is_identity() {
        for principal in [0.01, 1.0, 100_000.0, 1e12] {
            assert_eq!(compound(principal, [0.0_f64; 0]), principal);
        }
    }

    #[test]
    fn test_single_rate() {
        for (p, r) in [(100.0, 5.0), (1_000_000.0, 6.97), (250.0, -12.13), (1.0, 5507.0)] {
            assert_relative_eq!(compound(p, [r]), p * (1.0 + r / 100.0), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_grouping_does_not_change_result() {
        let p = 1_234_567.0;
        let (r1, r2) = (5.13, -2.54);
        assert_relative_eq!(
            compound(p, [r1, r2]),
            compound(compound(p, [r1]), [r2]),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_negative_rates_not_clamped() {
        assert_eq!(compound(100.0, [-75.0]), 25.0);
        assert_eq!(compound(100.0, [-100.0]), 0.0);
        assert!(compound(100.0, [-150.0]) < 0.0);
    }

    #[test]
    fn test_non_finite_principal_propagates() {
        assert!(compound(f64::NAN, [5.0]).is_nan());
        assert!(compound(f64::INFINITY, [5.0]).is_infinite());
        assert!(compound(f64::NAN, [0.0_f64; 0]).is_nan());
    }

    #[test]
    fn test_compound_flat_matches_power() {
        let value = compound_flat(100_000.0, 5, 4.0);
        assert_relative_eq!(value, 100_000.0 * 1.04_f64.powi(5), max_relative = 1e-9);
        assert_relative_eq!(value, 121_665.29, epsilon = 0.01);
        assert_eq!(compound_flat(500.0, 0, 4.0), 500.0);
    }

    #[test]
    fn test_request_records_applied_periods() {
        let table = RateTable::from_annual(&[(2010, 10.0), (2011, -50.0), (2013, 20.0)]);
        let result = CompoundingRequest::exclusive(&table, 100.0, 2010, 2014).run();

        assert_relative_eq!(result.final_value, 66.0, max_relative = 1e-12);
        assert_eq!(result.periods_applied.len(), 3);
        assert_eq!(result.periods_applied[1].period, Period::year(2011));
        assert_relative_eq!(result.periods_applied[1].value_after, 55.0, max_relative = 1e-12);
        assert_eq!(result.rates(), vec![10.0, -50.0, 20.0]);
        assert_relative_eq!(result.percentage_change(), -34.0, max_relative = 1e-9);
    }

    #[test]
    fn test_request_bounds() {
        let table = RateTable::from_annual(&[(2010, 10.0), (2011, 10.0)]);
        let exclusive = CompoundingRequest::exclusive(&table, 100.0, 2010, 2011).run();
        let inclusive = CompoundingRequest::inclusive(&table, 100.0, 2010, 2011).run();
        assert_eq!(exclusive.periods_applied.len(), 1);
        assert_eq!(inclusive.periods_applied.len(), 2);
        assert_relative_eq!(inclusive.final_value, 121.0, max_relative = 1e-12);
    }
}
