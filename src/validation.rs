//! Input checks run by front ends before calling a calculator
//!
//! The calculators trust their inputs; these are the limits the calculator
//! screens enforce.

use crate::error::InputError;
use crate::format::{parse_grouped_amount, parse_localized_decimal};

/// Longest projection horizon accepted, in years
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// Custom inflation rate limits, in percent
pub const MIN_CUSTOM_RATE: f64 = 0.0;
pub const MAX_CUSTOM_RATE: f64 = 30.0;

/// Strictly positive, finite amount
pub fn validate_amount(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NotPositive { field, value })
    }
}

/// Zero or positive, finite amount
pub fn validate_non_negative(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InputError::Negative { field, value })
    }
}

/// Parse a Rupiah amount typed with thousands dots and require it to be positive
pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let value = parse_grouped_amount(raw).ok_or_else(|| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    validate_amount(field, value)
}

/// Parse a percentage that may use a decimal comma
pub fn parse_rate(field: &'static str, raw: &str) -> Result<f64, InputError> {
    parse_localized_decimal(raw).ok_or_else(|| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// Projection horizon between 1 and [`MAX_PROJECTION_YEARS`]
pub fn validate_years(years: u32) -> Result<u32, InputError> {
    if (1..=MAX_PROJECTION_YEARS).contains(&years) {
        Ok(years)
    } else {
        Err(InputError::YearsOutOfRange {
            value: years,
            max: MAX_PROJECTION_YEARS,
        })
    }
}

/// Custom inflation rate within [`MIN_CUSTOM_RATE`]..=[`MAX_CUSTOM_RATE`]
pub fn validate_custom_rate(rate: f64) -> Result<f64, InputError> {
    if (MIN_CUSTOM_RATE..=MAX_CUSTOM_RATE).contains(&rate) {
        Ok(rate)
    } else {
        Err(InputError::RateOutOfRange {
            value: rate,
            min: MIN_CUSTOM_RATE,
            max: MAX_CUSTOM_RATE,
        })
    }
}

/// A past year with data: `first_year <= year < reference_year`
pub fn validate_past_year(year: i32, first_year: i32, reference_year: i32) -> Result<i32, InputError> {
    if year >= first_year && year < reference_year {
        Ok(year)
    } else {
        Err(InputError::YearOutOfRange {
            value: year,
            min: first_year,
            max: reference_year - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amounts() {
        assert_eq!(parse_amount("price", "150.000.000"), Ok(150_000_000.0));
        assert_eq!(
            parse_amount("price", "0"),
            Err(InputError::NotPositive { field: "price", value: 0.0 })
        );
        assert!(matches!(parse_amount("price", "abc"), Err(InputError::NotANumber { .. })));
        assert_eq!(
            parse_amount("price", "1.5"),
            Err(InputError::NotANumber { field: "price", value: "1.5".into() })
        );
        assert!(validate_amount("price", f64::INFINITY).is_err());
        assert_eq!(validate_non_negative("wage", 0.0), Ok(0.0));
        assert!(validate_non_negative("wage", -1.0).is_err());
    }

    #[test]
    fn test_years() {
        assert_eq!(validate_years(1), Ok(1));
        assert_eq!(validate_years(50), Ok(50));
        assert!(validate_years(0).is_err());
        assert!(validate_years(51).is_err());
    }

    #[test]
    fn test_custom_rate() {
        assert_eq!(parse_rate("rate", "4,5"), Ok(4.5));
        assert_eq!(validate_custom_rate(0.0), Ok(0.0));
        assert_eq!(validate_custom_rate(30.0), Ok(30.0));
        assert!(validate_custom_rate(-0.5).is_err());
        assert!(validate_custom_rate(30.5).is_err());
        assert!(validate_custom_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_past_year() {
        assert_eq!(validate_past_year(2010, 2010, 2025), Ok(2010));
        assert_eq!(
            validate_past_year(2025, 2010, 2025),
            Err(InputError::YearOutOfRange { value: 2025, min: 2010, max: 2024 })
        );
        assert!(validate_past_year(2009, 2010, 2025).is_err());
    }
}
