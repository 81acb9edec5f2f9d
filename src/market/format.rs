//! Number Formatting
//!
//! US-dollar display helpers for the market table.

const COMPACT_UNITS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];

/// Format a dollar amount.
///
/// Amounts above one million use compact notation (`$28.77B`), everything
/// else is shown with thousands separators and two decimals (`$61,245.82`).
pub fn format_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs > 1_000_000.0 {
        let (scaled, suffix) = compact_parts(abs);
        return format!("{}${}{}", sign, trim_fraction(scaled), suffix);
    }

    format!("{}${}", sign, group_thousands(abs))
}

/// Absolute change with a percent sign; direction is shown separately
pub fn format_change(pct: f64) -> String {
    format!("{}%", trim_fraction(pct.abs()))
}

/// Scaled value and unit suffix. A value that rounds to 1000 of one unit
/// is shown as 1 of the next (`$1B`, not `$1000M`).
fn compact_parts(abs: f64) -> (f64, &'static str) {
    let idx = COMPACT_UNITS
        .iter()
        .position(|(divisor, _)| abs >= *divisor)
        .unwrap_or(COMPACT_UNITS.len() - 1);

    let (divisor, suffix) = COMPACT_UNITS[idx];
    let scaled = abs / divisor;
    if idx > 0 && (scaled * 100.0).round() >= 100_000.0 {
        let (divisor, suffix) = COMPACT_UNITS[idx - 1];
        return (abs / divisor, suffix);
    }

    (scaled, suffix)
}

/// Up to two decimals, trailing zeros dropped
fn trim_fraction(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(value: f64) -> String {
    let text = format!("{:.2}", value);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((&text, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}.{}", grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_amounts() {
        assert_eq!(format_usd(61245.82), "$61,245.82");
        assert_eq!(format_usd(584.21), "$584.21");
        assert_eq!(format_usd(0.58), "$0.58");
        assert_eq!(format_usd(0.042), "$0.04");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_compact_amounts() {
        assert_eq!(format_usd(1_198_432_687_423.0), "$1.2T");
        assert_eq!(format_usd(28_765_345_987.0), "$28.77B");
        assert_eq!(format_usd(4_200_000_000.0), "$4.2B");
        assert_eq!(format_usd(5_678_912.0), "$5.68M");
    }

    #[test]
    fn test_compact_rounds_into_next_unit() {
        assert_eq!(format_usd(999_999_999.0), "$1B");
        assert_eq!(format_usd(999_999_999_999.0), "$1T");
        assert_eq!(format_usd(999_990_000.0), "$999.99M");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_usd(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_change() {
        assert_eq!(format_change(-0.87), "0.87%");
        assert_eq!(format_change(12.74), "12.74%");
        assert_eq!(format_change(2.5), "2.5%");
    }
}
