//! Number formatting helpers shared by the narrative, the cards and the report.
//!
//! Amounts are shown with comma thousands separators and at most three
//! fraction digits, the way a browser formats numbers for the `en` locale.

/// Currency symbol used everywhere amounts are displayed
pub const CURRENCY: &str = "₹";

/// Maximum fraction digits kept by [`group_thousands`]
const MAX_FRACTION_DIGITS: u32 = 3;

/// Format a number with thousands separators and up to three fraction digits.
///
/// Trailing zeros in the fraction are dropped, so `5000.0` becomes `"5,000"`
/// and `1234.5678` becomes `"1,234.568"`.
pub fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }

    let scale = 10u128.pow(MAX_FRACTION_DIGITS);
    let scaled = (value.abs() * scale as f64).round() as u128;
    let whole = scaled / scale;
    let fraction = scaled % scale;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction > 0 {
        let frac = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
        grouped.push('.');
        grouped.push_str(frac.trim_end_matches('0'));
    }

    if value < 0.0 && scaled > 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount as currency, e.g. `₹25,000` or `₹-5,000`
pub fn format_currency(value: f64) -> String {
    format!("{}{}", CURRENCY, group_thousands(value))
}

/// Prefix used for positive deltas; negatives carry their own minus sign
pub fn sign_prefix(value: f64) -> &'static str {
    if value > 0.0 { "+" } else { "" }
}

/// Round half up to a whole number (`2.5 -> 3`, `-2.5 -> -2`)
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Format with a fixed number of decimals, rounding half away from zero
pub fn to_fixed(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return group_thousands(value).replace(',', "");
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid printing "-0" for values that round to zero
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_integer() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(5000.0), "5,000");
        assert_eq!(group_thousands(475000.0), "475,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(-33000.0), "-33,000");
        assert_eq!(group_thousands(-12.0), "-12");
    }

    #[test]
    fn test_group_thousands_fraction() {
        assert_eq!(group_thousands(1234.5), "1,234.5");
        assert_eq!(group_thousands(1234.5678), "1,234.568");
        assert_eq!(group_thousands(0.0001), "0");
    }

    #[test]
    fn test_group_thousands_non_finite() {
        assert_eq!(group_thousands(f64::INFINITY), "∞");
        assert_eq!(group_thousands(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10000.0), "₹10,000");
        assert_eq!(format_currency(-5000.0), "₹-5,000");
    }

    #[test]
    fn test_sign_prefix() {
        assert_eq!(sign_prefix(1.0), "+");
        assert_eq!(sign_prefix(0.0), "");
        assert_eq!(sign_prefix(-1.0), "");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(8.62), 9.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(11.9), 12.0);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(-3.3793, 1), "-3.4");
        assert_eq!(to_fixed(0.0, 1), "0.0");
        assert_eq!(to_fixed(389.0, 0), "389");
        assert_eq!(to_fixed(474.5, 0), "475");
        assert_eq!(to_fixed(-0.01, 1), "0.0");
    }
}
