//! Regional minimum wage (UMR) figures

use serde::{Deserialize, Serialize};

use crate::error::RateLoadError;

/// Monthly minimum wage for one region, in Rupiah
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalWage {
    pub region: String,
    pub amount: f64,
}

/// Minimum wage by region, kept in listing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinimumWageTable {
    wages: Vec<RegionalWage>,
}

impl MinimumWageTable {
    /// Build from loaded rows, rejecting a region listed twice
    pub fn try_from_wages(wages: Vec<RegionalWage>) -> Result<Self, RateLoadError> {
        for (i, wage) in wages.iter().enumerate() {
            if wages[..i]
                .iter()
                .any(|w| w.region.eq_ignore_ascii_case(&wage.region))
            {
                return Err(RateLoadError::DuplicateRegion(wage.region.clone()));
            }
        }
        Ok(Self { wages })
    }

    /// Bundled 2024 figures
    pub fn default_2024() -> Self {
        let wages = [
            ("Jakarta", 5_200_000.0),
            ("Bandung", 4_300_000.0),
            ("Surabaya", 4_600_000.0),
            ("Medan", 3_700_000.0),
            ("Makassar", 3_500_000.0),
            ("Yogyakarta", 2_051_000.0),
            ("Semarang", 3_050_000.0),
            ("Bali", 2_900_000.0),
            ("Balikpapan", 3_200_000.0),
            ("Palembang", 3_400_000.0),
        ];
        Self {
            wages: wages
                .iter()
                .map(|&(region, amount)| RegionalWage {
                    region: region.to_string(),
                    amount,
                })
                .collect(),
        }
    }

    /// Wage for a region, matched case-insensitively
    pub fn get(&self, region: &str) -> Option<f64> {
        let region = region.trim();
        self.wages
            .iter()
            .find(|w| w.region.eq_ignore_ascii_case(region))
            .map(|w| w.amount)
    }

    /// Mean wage across all regions
    pub fn average(&self) -> Option<f64> {
        if self.wages.is_empty() {
            return None;
        }
        let total: f64 = self.wages.iter().map(|w| w.amount).sum();
        Some(total / self.wages.len() as f64)
    }

    pub fn regions(&self) -> impl Iterator<Item = &RegionalWage> {
        self.wages.iter()
    }

    pub fn len(&self) -> usize {
        self.wages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wages.is_empty()
    }
}
