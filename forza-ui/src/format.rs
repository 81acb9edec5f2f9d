//! Display formatting for market figures

const UNITS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];

/// Dollar text; compact (`$28.77B`) above one million
pub fn format_usd(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs <= 1e6 {
        return format!("{}${}", sign, with_separators(abs));
    }

    let idx = UNITS
        .iter()
        .position(|(divisor, _)| abs >= *divisor)
        .unwrap_or(UNITS.len() - 1);
    // 999.999M reads as 1B
    let idx = if idx > 0 && (abs / UNITS[idx].0 * 100.0).round() >= 100_000.0 {
        idx - 1
    } else {
        idx
    };

    let (divisor, suffix) = UNITS[idx];
    format!("{}${}{}", sign, trim_zeros(abs / divisor), suffix)
}

/// Percent without sign; the arrow shows direction
pub fn format_change(pct: f64) -> String {
    format!("{}%", trim_zeros(pct.abs()))
}

fn trim_zeros(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn with_separators(value: f64) -> String {
    let text = format!("{:.2}", value);
    let (whole, cents) = text.split_once('.').unwrap_or((&text, "00"));

    let digits: Vec<char> = whole.chars().collect();
    let mut out = String::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }

    format!("{}.{}", out, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(61245.82), "$61,245.82");
        assert_eq!(format_usd(0.15), "$0.15");
        assert_eq!(format_usd(398_754_321_654.0), "$398.75B");
        assert_eq!(format_usd(1_198_432_687_423.0), "$1.2T");
        assert_eq!(format_usd(999_999_999.0), "$1B");
        assert_eq!(format_usd(5_678_912.0), "$5.68M");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(-2.18), "2.18%");
        assert_eq!(format_change(5.0), "5%");
    }
}
