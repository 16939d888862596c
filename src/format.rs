//! Indonesian-locale number formatting and parsing for reports
//!
//! Thousands are grouped with `.` and decimals use `,`, as in `Rp 1.050.000`
//! or `21,7%`.

/// Group the integer part of an already-rounded, non-negative number
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Fixed-point rendering with id-ID separators
fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut out = String::new();
    // avoid "-0" for values that round to zero
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Whole Rupiah, e.g. `Rp 1.050.000` or `-Rp 25.000`
pub fn format_rupiah(value: f64) -> String {
    if !value.is_finite() {
        return format!("Rp {value}");
    }
    let body = format_fixed(value.abs(), 0);
    if value.round() < 0.0 {
        format!("-Rp {body}")
    } else {
        format!("Rp {body}")
    }
}

/// A fraction as a percentage: `format_percentage(0.2167, 1)` is `21,7%`
pub fn format_percentage(fraction: f64, decimals: usize) -> String {
    format!("{}%", format_fixed(fraction * 100.0, decimals))
}

/// A whole number with thousands separators
pub fn format_number_with_separator(value: f64) -> String {
    format_fixed(value, 0)
}

/// Relative description of `year` against `current_year`
pub fn format_year_difference(year: i32, current_year: i32) -> String {
    let diff = year - current_year;
    if diff == 0 {
        "tahun ini".to_string()
    } else if diff < 0 {
        format!("{} tahun yang lalu", -diff)
    } else {
        format!("dalam {} tahun", diff)
    }
}

/// Parse a decimal that may use a comma separator (`"6,97"`)
pub fn parse_localized_decimal(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse an amount typed with thousands dots (`"150.000.000"` or `"1.500,5"`)
///
/// Every dot must be followed by exactly three digits, so a decimal point
/// typed by mistake (`"1.5"`) is rejected instead of read as `15`.
pub fn parse_grouped_amount(value: &str) -> Option<f64> {
    let value = value.trim();
    let integer = value.split(',').next().unwrap_or("");
    let mut groups = integer.split('.');
    let lead = groups.next().unwrap_or("");
    if integer.contains('.') {
        let lead_digits = lead.strip_prefix('-').unwrap_or(lead);
        if lead_digits.is_empty() || lead_digits.len() > 3 {
            return None;
        }
        if !groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit())) {
            return None;
        }
    }
    let stripped: String = value.chars().filter(|&c| c != '.').collect();
    parse_localized_decimal(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(1_000_000.0), "Rp 1.000.000");
        assert_eq!(format_rupiah(121_665.29), "Rp 121.665");
        assert_eq!(format_rupiah(999.6), "Rp 1.000");
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(-25_000.0), "-Rp 25.000");
        assert_eq!(format_rupiah(-0.2), "Rp 0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.2167, 1), "21,7%");
        assert_eq!(format_percentage(0.05, 2), "5,00%");
        assert_eq!(format_percentage(12.5, 0), "1.250%");
        assert_eq!(format_percentage(-0.3312, 0), "-33%");
    }

    #[test]
    fn test_format_number_with_separator() {
        assert_eq!(format_number_with_separator(150_000_000.0), "150.000.000");
        assert_eq!(format_number_with_separator(12.0), "12");
    }

    #[test]
    fn test_format_year_difference() {
        assert_eq!(format_year_difference(2025, 2025), "tahun ini");
        assert_eq!(format_year_difference(2020, 2025), "5 tahun yang lalu");
        assert_eq!(format_year_difference(2028, 2025), "dalam 3 tahun");
    }

    #[test]
    fn test_parse_localized_decimal() {
        assert_eq!(parse_localized_decimal("6,97"), Some(6.97));
        assert_eq!(parse_localized_decimal(" -0.09 "), Some(-0.09));
        assert_eq!(parse_localized_decimal(""), None);
        assert_eq!(parse_localized_decimal("NaN"), None);
        assert_eq!(parse_localized_decimal("abc"), None);
    }

    #[test]
    fn test_parse_grouped_amount() {
        assert_eq!(parse_grouped_amount("150.000.000"), Some(150_000_000.0));
        assert_eq!(parse_grouped_amount("1.500,5"), Some(1500.5));
        assert_eq!(parse_grouped_amount("25000"), Some(25_000.0));
        assert_eq!(parse_grouped_amount("1.000"), Some(1_000.0));
    }

    #[test]
    fn test_parse_grouped_amount_rejects_decimal_point() {
        assert_eq!(parse_grouped_amount("1.5"), None);
        assert_eq!(parse_grouped_amount("1.50"), None);
        assert_eq!(parse_grouped_amount("1.5000"), None);
        assert_eq!(parse_grouped_amount("1500.000.0"), None);
        assert_eq!(parse_grouped_amount(".500"), None);
        assert_eq!(parse_grouped_amount("1..000"), None);
    }
}
