//! Monthly living costs against the regional minimum wage

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::percentage_difference;
use crate::error::CalcError;
use crate::rates::MinimumWageTable;

/// Bounds of the personal inflation estimate, in percent
pub const PERSONAL_INFLATION_FLOOR: f64 = 1.5;
pub const PERSONAL_INFLATION_CAP: f64 = 15.0;

/// Household spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Food,
    Rent,
    Transport,
    Utilities,
    Entertainment,
    Others,
}

impl CostCategory {
    pub const ALL: [CostCategory; 6] = [
        CostCategory::Food,
        CostCategory::Rent,
        CostCategory::Transport,
        CostCategory::Utilities,
        CostCategory::Entertainment,
        CostCategory::Others,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CostCategory::Food => "food",
            CostCategory::Rent => "rent",
            CostCategory::Transport => "transport",
            CostCategory::Utilities => "utilities",
            CostCategory::Entertainment => "entertainment",
            CostCategory::Others => "others",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Food => "Makanan",
            CostCategory::Rent => "Sewa/Cicilan",
            CostCategory::Transport => "Transportasi",
            CostCategory::Utilities => "Tagihan",
            CostCategory::Entertainment => "Hiburan",
            CostCategory::Others => "Lainnya",
        }
    }

    /// Typical monthly spend in Rupiah
    pub fn default_cost(&self) -> f64 {
        match self {
            CostCategory::Food => 1_200_000.0,
            CostCategory::Rent => 1_500_000.0,
            CostCategory::Transport => 600_000.0,
            CostCategory::Utilities => 500_000.0,
            CostCategory::Entertainment => 300_000.0,
            CostCategory::Others => 400_000.0,
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        CostCategory::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| format!("unknown cost category {s:?}"))
    }
}

/// Monthly spending per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivingCosts {
    costs: BTreeMap<CostCategory, f64>,
}

impl LivingCosts {
    /// Every category at zero
    pub fn empty() -> Self {
        Self {
            costs: CostCategory::ALL.iter().map(|&c| (c, 0.0)).collect(),
        }
    }

    pub fn set(&mut self, category: CostCategory, amount: f64) {
        self.costs.insert(category, amount);
    }

    pub fn with(mut self, category: CostCategory, amount: f64) -> Self {
        self.set(category, amount);
        self
    }

    pub fn get(&self, category: CostCategory) -> f64 {
        self.costs.get(&category).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.costs.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        self.costs.iter().map(|(&c, &amount)| (c, amount))
    }
}

impl Default for LivingCosts {
    /// Typical spend for every category
    fn default() -> Self {
        Self {
            costs: CostCategory::ALL.iter().map(|&c| (c, c.default_cost())).collect(),
        }
    }
}

/// Where the wage to compare against comes from
#[derive(Debug, Clone, PartialEq)]
pub enum WageSource {
    /// Looked up in the minimum wage table
    Region(String),
    /// Entered by the user
    Custom(f64),
}

/// Living costs compared with a monthly wage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivingCostComparison {
    /// `None` for a custom wage
    pub region: Option<String>,
    pub minimum_wage: f64,
    pub total_cost: f64,
    /// Wage minus costs; negative is a shortfall
    pub surplus: f64,
    /// Costs relative to the wage, in percent
    pub percentage_difference: f64,
    /// Share of the wage spent, capped at 100
    pub coverage_percent: f64,
    /// Rough personal inflation estimate, in percent
    pub personal_inflation: f64,
}

impl LivingCostComparison {
    pub fn new(
        wages: &MinimumWageTable,
        source: &WageSource,
        costs: &LivingCosts,
    ) -> Result<Self, CalcError> {
        let (region, minimum_wage) = match source {
            WageSource::Region(name) => {
                let wage = wages
                    .get(name)
                    .ok_or_else(|| CalcError::UnknownRegion(name.clone()))?;
                (Some(name.trim().to_string()), wage)
            }
            WageSource::Custom(amount) => (None, *amount),
        };

        let total_cost = costs.total();
        let coverage_percent = if minimum_wage > 0.0 {
            (total_cost / minimum_wage * 100.0).min(100.0)
        } else {
            100.0
        };

        Ok(Self {
            region,
            minimum_wage,
            total_cost,
            surplus: minimum_wage - total_cost,
            percentage_difference: percentage_difference(minimum_wage, total_cost),
            coverage_percent,
            personal_inflation: personal_inflation_estimate(wages, total_cost)?,
        })
    }

    /// True when the wage covers every cost
    pub fn is_covered(&self) -> bool {
        self.surplus >= 0.0
    }
}

/// Spending against the average regional wage, clamped to 1.5%-15%
///
/// A rough indicator only: higher spending relative to typical wages is read
/// as higher exposure to price increases.
pub fn personal_inflation_estimate(wages: &MinimumWageTable, total_cost: f64) -> Result<f64, CalcError> {
    let average = wages.average().ok_or(CalcError::EmptyWageTable)?;
    let estimate = (total_cost / average - 1.0) * 100.0;
    Ok(estimate.clamp(PERSONAL_INFLATION_FLOOR, PERSONAL_INFLATION_CAP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_costs_total() {
        assert_eq!(LivingCosts::default().total(), 4_500_000.0);
        assert_eq!(LivingCosts::empty().total(), 0.0);
    }

    #[test]
    fn test_jakarta_defaults_are_covered() {
        let wages = MinimumWageTable::default_2024();
        let result = LivingCostComparison::new(
            &wages,
            &WageSource::Region("Jakarta".into()),
            &LivingCosts::default(),
        )
        .unwrap();

        assert!(result.is_covered());
        assert_eq!(result.surplus, 700_000.0);
        assert_relative_eq!(
            result.percentage_difference,
            (4_500_000.0 - 5_200_000.0) / 5_200_000.0 * 100.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.coverage_percent, 4_500_000.0 / 5_200_000.0 * 100.0, max_relative = 1e-12);
        // 4.5M against a 3.5901M average
        assert_relative_eq!(
            result.personal_inflation,
            PERSONAL_INFLATION_CAP.min((4_500_000.0 / 3_590_100.0 - 1.0) * 100.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_shortfall_caps_coverage() {
        let wages = MinimumWageTable::default_2024();
        let result = LivingCostComparison::new(
            &wages,
            &WageSource::Region("yogyakarta".into()),
            &LivingCosts::default(),
        )
        .unwrap();

        assert!(!result.is_covered());
        assert_eq!(result.coverage_percent, 100.0);
        assert!(result.percentage_difference > 0.0);
    }

    #[test]
    fn test_unknown_region() {
        let wages = MinimumWageTable::default_2024();
        let err = LivingCostComparison::new(&wages, &WageSource::Region("Atlantis".into()), &LivingCosts::default());
        assert_eq!(err, Err(CalcError::UnknownRegion("Atlantis".into())));
    }

    #[test]
    fn test_zero_custom_wage_propagates_infinity() {
        let wages = MinimumWageTable::default_2024();
        let result =
            LivingCostComparison::new(&wages, &WageSource::Custom(0.0), &LivingCosts::default()).unwrap();
        assert!(result.percentage_difference.is_infinite());
        assert_eq!(result.coverage_percent, 100.0);
        assert_eq!(result.region, None);
    }

    #[test]
    fn test_personal_inflation_is_clamped() {
        let wages = MinimumWageTable::default_2024();
        assert_eq!(personal_inflation_estimate(&wages, 0.0).unwrap(), PERSONAL_INFLATION_FLOOR);
        assert_eq!(personal_inflation_estimate(&wages, 1e9).unwrap(), PERSONAL_INFLATION_CAP);
        assert_eq!(
            personal_inflation_estimate(&MinimumWageTable::default(), 1.0),
            Err(CalcError::EmptyWageTable)
        );
    }

    #[test]
    fn test_cost_category_parse() {
        assert_eq!("Rent".parse::<CostCategory>().unwrap(), CostCategory::Rent);
        assert!("yacht".parse::<CostCategory>().is_err());
    }
}
