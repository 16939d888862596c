//! Calculators built on the compounding engine
//!
//! Each calculator resolves the rate table it needs and delegates to
//! [`crate::compounding`]. None of them validate input; see
//! [`crate::validation`] for the checks a front end runs first.

mod historical;
mod investment;
mod living_cost;
mod projection;

pub use historical::{historical_adjusted_value, historical_adjustment, HistoricalValue};
pub use investment::{
    investment_growth, investment_return, yearly_returns, AssetOutcome, AssetYearReturn,
    InvestmentComparison, YearlyReturns,
};
pub use living_cost::{
    personal_inflation_estimate, CostCategory, LivingCostComparison, LivingCosts, WageSource,
    PERSONAL_INFLATION_CAP, PERSONAL_INFLATION_FLOOR,
};
pub use projection::{
    future_value, GoalProjection, InflationScenario, LifeGoal, ScenarioOutcome, ScenarioProjection,
};

use chrono::Datelike;
use log::debug;

use crate::compounding::CompoundingResult;
use crate::error::CalcError;
use crate::rates::{AssetClass, Period, RateBook, RateTable};

/// `(comparison - baseline) / baseline * 100`
///
/// A zero baseline yields an infinite or NaN result.
pub fn percentage_difference(baseline: f64, comparison: f64) -> f64 {
    (comparison - baseline) / baseline * 100.0
}

/// Calculator session: a fixed set of rate tables and a reference ("current") year
///
/// # Example
/// ```
/// use berapa_nanti::Calculator;
///
/// let calc = Calculator::builtin().with_reference_year(2025);
/// let today = calc.historical_adjusted_value(1_000_000.0, 2015, 2025)?;
/// assert!(today > 1_000_000.0);
/// # Ok::<(), berapa_nanti::CalcError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    rates: RateBook,
    reference_year: i32,
}

impl Calculator {
    /// Create a calculator over `rates`, with the current calendar year as reference
    pub fn new(rates: RateBook) -> Self {
        Self {
            rates,
            reference_year: chrono::Local::now().year(),
        }
    }

    /// Calculator over the bundled sample data
    pub fn builtin() -> Self {
        Self::new(RateBook::builtin())
    }

    /// Override the reference year used as "now"
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn rates(&self) -> &RateBook {
        &self.rates
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// The general inflation table; an empty one cannot answer anything
    fn inflation(&self) -> Result<&RateTable, CalcError> {
        if self.rates.inflation.is_empty() {
            return Err(CalcError::EmptyInflationTable);
        }
        Ok(&self.rates.inflation)
    }

    /// Inflation for the reference year, or the latest recorded rate
    pub fn current_inflation_rate(&self) -> Result<f64, CalcError> {
        let table = self.inflation()?;
        if let Some(rate) = table.get(Period::year(self.reference_year)) {
            return Ok(rate);
        }
        debug!(
            "no inflation rate for {}, using latest period {:?}",
            self.reference_year,
            table.latest_period()
        );
        table.latest_rate().ok_or(CalcError::EmptyInflationTable)
    }

    /// Inflation table years before the reference year, newest first
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .rates
            .inflation
            .years()
            .into_iter()
            .filter(|&year| year < self.reference_year)
            .collect();
        years.reverse();
        years
    }

    /// Future value at a flat rate
    pub fn future_value(&self, present_value: f64, years: u32, annual_rate_percent: f64) -> f64 {
        future_value(present_value, years, annual_rate_percent)
    }

    /// Future value under every preset inflation scenario
    pub fn scenario_projection(&self, present_value: f64, years: u32) -> ScenarioProjection {
        ScenarioProjection::new(present_value, years)
    }

    /// Cost of a savings goal after `years`, under every scenario
    pub fn goal_cost(&self, goal: &str, current_cost: f64, years: u32) -> GoalProjection {
        GoalProjection::new(goal, current_cost, years)
    }

    /// `value` from `from_year` restated in `to_year` money (`to_year` excluded)
    pub fn historical_adjusted_value(&self, value: f64, from_year: i32, to_year: i32) -> Result<f64, CalcError> {
        Ok(historical_adjusted_value(self.inflation()?, value, from_year, to_year))
    }

    /// Like [`Self::historical_adjusted_value`], keeping the applied periods
    pub fn historical_adjustment(
        &self,
        value: f64,
        from_year: i32,
        to_year: i32,
    ) -> Result<CompoundingResult, CalcError> {
        Ok(historical_adjustment(self.inflation()?, value, from_year, to_year))
    }

    /// `value` from `from_year` restated in reference-year money
    pub fn historical_value(&self, value: f64, from_year: i32) -> Result<HistoricalValue, CalcError> {
        Ok(HistoricalValue::new(self.inflation()?, value, from_year, self.reference_year))
    }

    /// Investment value after `from_year..=to_year` of `asset` returns
    pub fn investment_return(
        &self,
        initial_amount: f64,
        asset: AssetClass,
        from_year: i32,
        to_year: i32,
    ) -> Result<f64, CalcError> {
        investment_return(&self.rates.asset_returns, initial_amount, asset, from_year, to_year)
    }

    /// Like [`Self::investment_return`], keeping the applied periods
    pub fn investment_growth(
        &self,
        initial_amount: f64,
        asset: AssetClass,
        from_year: i32,
        to_year: i32,
    ) -> Result<CompoundingResult, CalcError> {
        investment_growth(&self.rates.asset_returns, initial_amount, asset, from_year, to_year)
    }

    /// Compare assets from `start_year` through the reference year
    pub fn compare_investments(
        &self,
        initial_amount: f64,
        assets: &[AssetClass],
        start_year: i32,
    ) -> Result<InvestmentComparison, CalcError> {
        InvestmentComparison::new(
            &self.rates.asset_returns,
            initial_amount,
            assets,
            start_year,
            self.reference_year,
        )
    }

    /// Yearly returns of `assets` from `start_year` up to the reference year
    pub fn yearly_returns(&self, assets: &[AssetClass], start_year: i32) -> Result<Vec<YearlyReturns>, CalcError> {
        yearly_returns(&self.rates.asset_returns, assets, start_year, self.reference_year)
    }

    /// Compare monthly living costs with a regional or custom wage
    pub fn living_cost(&self, wage: &WageSource, costs: &LivingCosts) -> Result<LivingCostComparison, CalcError> {
        LivingCostComparison::new(&self.rates.minimum_wages, wage, costs)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compounding::compound;
    use approx::assert_relative_eq;

    fn calc() -> Calculator {
        Calculator::builtin().with_reference_year(2025)
    }

    #[test]
    fn test_percentage_difference() {
        for a in [1.0, -3.5, 5_200_000.0] {
            assert_eq!(percentage_difference(a, a), 0.0);
        }
        assert_relative_eq!(percentage_difference(200.0, 250.0), 25.0);
        assert!(percentage_difference(0.0, 10.0).is_infinite());
        assert!(percentage_difference(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_current_inflation_rate_falls_back_to_latest() {
        assert_eq!(calc().current_inflation_rate().unwrap(), 2.84);
        assert_eq!(
            Calculator::builtin().with_reference_year(2013).current_inflation_rate().unwrap(),
            6.97
        );

        let empty = RateBook::builtin().with_inflation(RateTable::new());
        assert_eq!(
            Calculator::new(empty).current_inflation_rate(),
            Err(CalcError::EmptyInflationTable)
        );
    }

    #[test]
    fn test_available_years_descending() {
        let years = Calculator::builtin().with_reference_year(2015).available_years();
        assert_eq!(years, vec![2014, 2013, 2012, 2011, 2010]);
    }

    #[test]
    fn test_historical_value_uses_reference_year() {
        let report = calc().historical_value(1_000_000.0, 2015).unwrap();
        assert_eq!(report.to_year, 2025);
        assert_eq!(report.year_difference, 10);
        assert_eq!(report.applied.periods_applied.len(), 10);
        assert_relative_eq!(
            report.current_value,
            calc().historical_adjusted_value(1_000_000.0, 2015, 2025).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_historical_adjustment_on_monthly_table() {
        let monthly = crate::rates::loader::load_monthly_inflation(
            "Periode;Inflasi\n2024-11;1,55\n2024-12;1,57\n2025-01;0,76\n".as_bytes(),
        )
        .unwrap();
        let calc = Calculator::new(RateBook::builtin().with_inflation(monthly)).with_reference_year(2025);

        let adjusted = calc.historical_adjusted_value(100.0, 2024, 2025).unwrap();
        assert_relative_eq!(adjusted, compound(100.0, [1.55, 1.57]), max_relative = 1e-12);
        assert_eq!(calc.current_inflation_rate().unwrap(), 0.76);
    }

    #[test]
    fn test_historical_on_empty_inflation_table_is_an_error() {
        let calc = Calculator::new(RateBook::builtin().with_inflation(RateTable::new()))
            .with_reference_year(2025);

        assert_eq!(calc.historical_value(1000.0, 2015), Err(CalcError::EmptyInflationTable));
        assert_eq!(
            calc.historical_adjusted_value(1000.0, 2015, 2025),
            Err(CalcError::EmptyInflationTable)
        );
        assert_eq!(
            calc.historical_adjustment(1000.0, 2015, 2025),
            Err(CalcError::EmptyInflationTable)
        );
    }

    #[test]
    fn test_compare_investments_through_reference_year() {
        let comparison = calc()
            .compare_investments(10_000_000.0, &[AssetClass::Stocks], 2020)
            .unwrap();
        assert_eq!(comparison.end_year, 2025);
        // 2025 has no data: only 2020-2024 apply
        assert_eq!(comparison.outcomes[0].applied.periods_applied.len(), 5);
    }

    #[test]
    fn test_living_cost_via_calculator() {
        let result = calc()
            .living_cost(&WageSource::Region("Surabaya".into()), &LivingCosts::default())
            .unwrap();
        assert_eq!(result.region.as_deref(), Some("Surabaya"));
        assert_eq!(result.surplus, 100_000.0);
    }

    #[test]
    fn test_goal_cost() {
        let goal = calc().goal_cost("Beli Rumah", 800_000_000.0, 10);
        let high = goal.scenarios.get(InflationScenario::High).unwrap();
        assert_relative_eq!(high.future_value, 800_000_000.0 * 1.06_f64.powi(10), max_relative = 1e-9);
    }
}
