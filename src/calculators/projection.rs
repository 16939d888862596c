//! Forward projections at a flat inflation rate: future prices and goal costs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compounding::compound_flat;
use crate::error::CalcError;

/// Future value of `present_value` after `years` of `annual_rate_percent` inflation
pub fn future_value(present_value: f64, years: u32, annual_rate_percent: f64) -> f64 {
    compound_flat(present_value, years, annual_rate_percent)
}

/// Preset inflation assumptions for projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InflationScenario {
    Low,
    Medium,
    High,
}

impl InflationScenario {
    pub const ALL: [InflationScenario; 3] = [
        InflationScenario::Low,
        InflationScenario::Medium,
        InflationScenario::High,
    ];

    /// Annual rate in percent
    pub fn rate(&self) -> f64 {
        match self {
            InflationScenario::Low => 2.5,
            InflationScenario::Medium => 4.0,
            InflationScenario::High => 6.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InflationScenario::Low => "Rendah",
            InflationScenario::Medium => "Sedang",
            InflationScenario::High => "Tinggi",
        }
    }
}

impl fmt::Display for InflationScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.label(), self.rate())
    }
}

impl FromStr for InflationScenario {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "rendah" => Ok(InflationScenario::Low),
            "medium" | "sedang" => Ok(InflationScenario::Medium),
            "high" | "tinggi" => Ok(InflationScenario::High),
            _ => Err(CalcError::UnknownScenario(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: InflationScenario,
    pub rate: f64,
    pub future_value: f64,
}

/// One present value projected under every preset scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub present_value: f64,
    pub years: u32,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioProjection {
    pub fn new(present_value: f64, years: u32) -> Self {
        let outcomes = InflationScenario::ALL
            .iter()
            .map(|&scenario| ScenarioOutcome {
                scenario,
                rate: scenario.rate(),
                future_value: future_value(present_value, years, scenario.rate()),
            })
            .collect();
        Self {
            present_value,
            years,
            outcomes,
        }
    }

    pub fn get(&self, scenario: InflationScenario) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.scenario == scenario)
    }
}

/// Common savings goals with a typical present-day cost in Rupiah
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeGoal {
    Wedding,
    Car,
    Motorcycle,
    Education,
    House,
    Travel,
}

impl LifeGoal {
    pub const ALL: [LifeGoal; 6] = [
        LifeGoal::Wedding,
        LifeGoal::Car,
        LifeGoal::Motorcycle,
        LifeGoal::Education,
        LifeGoal::House,
        LifeGoal::Travel,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LifeGoal::Wedding => "wedding",
            LifeGoal::Car => "car",
            LifeGoal::Motorcycle => "motorcycle",
            LifeGoal::Education => "education",
            LifeGoal::House => "house",
            LifeGoal::Travel => "travel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LifeGoal::Wedding => "Nikah",
            LifeGoal::Car => "Beli Mobil",
            LifeGoal::Motorcycle => "Beli Motor",
            LifeGoal::Education => "Pendidikan Anak",
            LifeGoal::House => "Beli Rumah",
            LifeGoal::Travel => "Liburan",
        }
    }

    pub fn default_cost(&self) -> f64 {
        match self {
            LifeGoal::Wedding => 150_000_000.0,
            LifeGoal::Car => 250_000_000.0,
            LifeGoal::Motorcycle => 25_000_000.0,
            LifeGoal::Education => 300_000_000.0,
            LifeGoal::House => 800_000_000.0,
            LifeGoal::Travel => 50_000_000.0,
        }
    }
}

impl FromStr for LifeGoal {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        LifeGoal::ALL
            .into_iter()
            .find(|goal| goal.key() == key)
            .ok_or_else(|| CalcError::UnknownGoal(s.to_string()))
    }
}

/// Cost of a goal today and under each inflation scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub goal: String,
    pub current_cost: f64,
    pub years: u32,
    pub scenarios: ScenarioProjection,
}

impl GoalProjection {
    pub fn new(goal: impl Into<String>, current_cost: f64, years: u32) -> Self {
        Self {
            goal: goal.into(),
            current_cost,
            years,
            scenarios: ScenarioProjection::new(current_cost, years),
        }
    }

    /// Projection for a preset goal at its default cost
    pub fn preset(goal: LifeGoal, years: u32) -> Self {
        Self::new(goal.label(), goal.default_cost(), years)
    }

    /// Extra money needed under `scenario` compared to today
    pub fn additional_cost(&self, scenario: InflationScenario) -> Option<f64> {
        self.scenarios
            .get(scenario)
            .map(|o| o.future_value - self.current_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_future_value_reference_scenario() {
        assert_relative_eq!(future_value(100_000.0, 5, 4.0), 121_665.29, epsilon = 0.01);
    }

    #[test]
    fn test_future_value_zero_years() {
        assert_eq!(future_value(100_000.0, 0, 6.0), 100_000.0);
    }

    #[test]
    fn test_scenario_projection_orders_by_rate() {
        let projection = ScenarioProjection::new(100_000.0, 10);
        let low = projection.get(InflationScenario::Low).unwrap().future_value;
        let medium = projection.get(InflationScenario::Medium).unwrap().future_value;
        let high = projection.get(InflationScenario::High).unwrap().future_value;

        assert!(low < medium && medium < high);
        assert_relative_eq!(high, 100_000.0 * 1.06_f64.powi(10), max_relative = 1e-9);
    }

    #[test]
    fn test_scenario_parse() {
        assert_eq!("HIGH".parse::<InflationScenario>().unwrap(), InflationScenario::High);
        assert_eq!("sedang".parse::<InflationScenario>().unwrap(), InflationScenario::Medium);
        assert!("extreme".parse::<InflationScenario>().is_err());
    }

    #[test]
    fn test_goal_projection() {
        let goal = GoalProjection::preset(LifeGoal::Wedding, 5);
        assert_eq!(goal.current_cost, 150_000_000.0);
        assert_eq!(goal.goal, "Nikah");

        let extra = goal.additional_cost(InflationScenario::Medium).unwrap();
        assert_relative_eq!(extra, 150_000_000.0 * (1.04_f64.powi(5) - 1.0), max_relative = 1e-9);
    }

    #[test]
    fn test_life_goal_parse() {
        assert_eq!("House".parse::<LifeGoal>().unwrap(), LifeGoal::House);
        assert_eq!(
            "yacht".parse::<LifeGoal>(),
            Err(CalcError::UnknownGoal("yacht".to_string()))
        );
    }
}
