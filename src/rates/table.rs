//! Period-indexed rate tables
//!
//! A table maps a [`Period`] (a year, or a year and month) to a signed
//! percentage rate. Tables may have gaps; a missing period always reads as 0%.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RateLoadError;

/// One compounding step: a calendar year, optionally narrowed to a month
///
/// Ordering is chronological. An annual period sorts before any monthly period
/// of the same year, so `Period::year(y)` is a valid lower bound for all of
/// year `y` and a valid exclusive upper bound for everything before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    /// 1-12 for month-granular tables
    pub month: Option<u8>,
}

impl Period {
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn monthly(year: i32, month: u8) -> Self {
        Self { year, month: Some(month) }
    }

    pub fn is_monthly(&self) -> bool {
        self.month.is_some()
    }

    /// Last possible period of this period's year (sorts after every month)
    fn end_of_year(year: i32) -> Self {
        Self { year, month: Some(u8::MAX) }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(month) => write!(f, "{}-{:02}", self.year, month),
            None => write!(f, "{}", self.year),
        }
    }
}

impl FromStr for Period {
    type Err = RateLoadError;

    /// Parses `"2025"` or `"2025-03"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RateLoadError::InvalidPeriod(s.to_string());
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(2, '-');

        let year: i32 = parts
            .next()
            .and_then(|y| y.trim().parse().ok())
            .ok_or_else(invalid)?;

        match parts.next() {
            None => Ok(Period::year(year)),
            Some(m) => {
                let month: u8 = m.trim().parse().map_err(|_| invalid())?;
                if !(1..=12).contains(&month) {
                    return Err(invalid());
                }
                Ok(Period::monthly(year, month))
            }
        }
    }
}

/// A single `(period, rate)` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub period: Period,
    /// Signed percentage, e.g. 6.97 means +6.97%
    pub rate: f64,
}

impl RateEntry {
    pub fn new(period: Period, rate: f64) -> Self {
        Self { period, rate }
    }
}

/// How the upper year of a range is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// `from <= year < to`
    Exclusive,
    /// `from <= year <= to`
    Inclusive,
}

/// Ordered, immutable period → rate mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<Period, f64>,
}

impl RateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an annual table from `(year, rate)` pairs
    ///
    /// Intended for bundled constant data. A repeated year keeps the last rate.
    pub fn from_annual(rates: &[(i32, f64)]) -> Self {
        Self {
            rates: rates
                .iter()
                .map(|&(year, rate)| (Period::year(year), rate))
                .collect(),
        }
    }

    /// Build a table from loaded entries, rejecting duplicate periods
    ///
    /// An annual entry and a monthly entry of the same year also count as
    /// duplicates, since both would compound for that year.
    pub fn try_from_entries<I>(entries: I) -> Result<Self, RateLoadError>
    where
        I: IntoIterator<Item = RateEntry>,
    {
        let mut rates: BTreeMap<Period, f64> = BTreeMap::new();
        for entry in entries {
            let year = entry.period.year;
            let overlaps = match entry.period.month {
                None => rates
                    .range(Period::monthly(year, 1)..=Period::end_of_year(year))
                    .next()
                    .is_some(),
                Some(_) => rates.contains_key(&Period::year(year)),
            };
            if overlaps || rates.insert(entry.period, entry.rate).is_some() {
                return Err(RateLoadError::DuplicatePeriod(entry.period));
            }
        }
        Ok(Self { rates })
    }

    /// Return a copy of this table with one period set to `rate`
    pub fn with_entry(mut self, period: Period, rate: f64) -> Self {
        self.rates.insert(period, rate);
        self
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// True if any entry carries a month
    pub fn is_monthly(&self) -> bool {
        self.rates.keys().any(Period::is_monthly)
    }

    /// Exact lookup, `None` when the period is absent
    pub fn get(&self, period: Period) -> Option<f64> {
        self.rates.get(&period).copied()
    }

    /// Total lookup: the rate for `period`, or 0% when absent
    pub fn rate_at(&self, period: Period) -> f64 {
        self.get(period).unwrap_or(0.0)
    }

    /// Total lookup of an annual rate
    pub fn rate_for_year(&self, year: i32) -> f64 {
        self.rate_at(Period::year(year))
    }

    /// Maximum period present
    pub fn latest_period(&self) -> Option<Period> {
        self.rates.last_key_value().map(|(period, _)| *period)
    }

    /// Minimum period present
    pub fn earliest_period(&self) -> Option<Period> {
        self.rates.first_key_value().map(|(period, _)| *period)
    }

    /// Rate stored at the latest period
    pub fn latest_rate(&self) -> Option<f64> {
        self.rates.last_key_value().map(|(_, rate)| *rate)
    }

    /// Entries with `from <= period < to`, ascending
    pub fn rates_in_range(&self, from: Period, to: Period) -> Vec<RateEntry> {
        if from >= to {
            return Vec::new();
        }
        self.rates
            .range(from..to)
            .map(|(&period, &rate)| RateEntry::new(period, rate))
            .collect()
    }

    /// Entries whose year lies in `from_year..to_year` (or `..=to_year`), ascending
    ///
    /// Every monthly record of a matching year is returned.
    pub fn years_in_range(&self, from_year: i32, to_year: i32, upper: UpperBound) -> Vec<RateEntry> {
        match upper {
            UpperBound::Exclusive => {
                self.rates_in_range(Period::year(from_year), Period::year(to_year))
            }
            UpperBound::Inclusive => {
                if from_year > to_year {
                    return Vec::new();
                }
                self.rates
                    .range(Period::year(from_year)..=Period::end_of_year(to_year))
                    .map(|(&period, &rate)| RateEntry::new(period, rate))
                    .collect()
            }
        }
    }

    /// All entries, ascending
    pub fn entries(&self) -> impl Iterator<Item = RateEntry> + '_ {
        self.rates
            .iter()
            .map(|(&period, &rate)| RateEntry::new(period, rate))
    }

    /// Distinct years present, ascending
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rates.keys().map(|p| p.year).collect();
        years.dedup();
        years
    }

    /// Collapse a month-granular table to one rate per year
    ///
    /// Each year keeps the rate of its latest period. Annual tables come back
    /// unchanged.
    pub fn collapse_to_annual(&self) -> RateTable {
        let mut rates = BTreeMap::new();
        for (period, rate) in &self.rates {
            // ascending iteration: later months overwrite earlier ones
            rates.insert(Period::year(period.year), *rate);
        }
        RateTable { rates }
    }
}
