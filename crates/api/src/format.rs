//! Currency Formatting

/// Format a dollar amount with thousands separators and two decimals,
/// e.g. `$12,345.67` or `-$1,234.50`
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.001 rounds to 0.00 and should not carry a sign
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_currency(12_345.678), "$12,345.68");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(100.0), "$100.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_currency(-1_234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }
}
