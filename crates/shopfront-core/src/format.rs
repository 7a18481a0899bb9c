// Number formatting in the Russian locale style: "1 234,56"

/// Thousands separator (no-break space, so prices never wrap mid-number)
const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number with locale grouping, up to three fraction digits, no trailing zeros
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (rendered.as_str(), ""),
    };

    let mut out = String::with_capacity(rendered.len() + 4);
    // -0.0004 rounds to "0,000"; don't print "-0"
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }

    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }

    out
}

/// Price with currency symbol, e.g. "109,95 ₽"
pub fn format_price(value: f64, currency_symbol: &str) -> String {
    format!("{} {}", format_number(value), currency_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(109.95), "109,95");
        assert_eq!(format_number(22.3), "22,3");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_number(1000.0), "1\u{a0}000");
        assert_eq!(format_number(1234.5), "1\u{a0}234,5");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1234567.891), "1\u{a0}234\u{a0}567,891");
    }

    #[test]
    fn test_rounds_to_three_digits() {
        assert_eq!(format_number(1.23456), "1,235");
        assert_eq!(format_number(0.9999), "1");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_number(-1500.25), "-1\u{a0}500,25");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_price() {
        assert_eq!(format_price(55.99, "₽"), "55,99 ₽");
    }
}
