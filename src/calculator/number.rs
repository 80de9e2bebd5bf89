//! Conversion between displayed text and numbers.
//!
//! The display is plain text, so every operation parses it before doing any
//! arithmetic and renders the result back. Both directions are lenient in the
//! way a keypad calculator needs: `"12."` is a valid operand while it is being
//! typed, and invalid results are kept as `NaN` / `Infinity` text rather than
//! rejected.

/// Parse the leading number of `text`.
///
/// Leading whitespace is skipped and anything after the longest numeric
/// prefix is ignored. Returns NaN when there is no numeric prefix at all.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // The exponent only counts when it has at least one digit.
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Render a number as text.
///
/// Integers print without a fraction, very large and very small magnitudes
/// switch to exponential notation with an explicit exponent sign, and the
/// IEEE sentinels print as `NaN`, `Infinity` and `-Infinity`.
pub fn number_to_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers negative zero too.
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return with_signed_exponent(&format!("{value:e}"));
    }

    format!("{value}")
}

/// Turn Rust's `1.5e9` exponent style into `1.5e+9`.
pub(crate) fn with_signed_exponent(formatted: &str) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("0"), 0.0);
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("-3.25"), -3.25);
        assert_eq!(parse_number("+7"), 7.0);
        assert_eq!(parse_number(".5"), 0.5);
    }

    #[test]
    fn test_parse_partial_input() {
        assert_eq!(parse_number("12."), 12.0);
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number("  8"), 8.0);
        assert_eq!(parse_number("3abc"), 3.0);
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("2e+"), 2.0);
    }

    #[test]
    fn test_parse_exponents() {
        assert_eq!(parse_number("1e+21"), 1e21);
        assert_eq!(parse_number("1.5e-7"), 1.5e-7);
        assert_eq!(parse_number("1e+215"), 1e215);
    }

    #[test]
    fn test_parse_sentinels() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("inf").is_nan());
    }

    #[test]
    fn test_text_integers_and_decimals() {
        assert_eq!(number_to_text(5.0), "5");
        assert_eq!(number_to_text(-12.0), "-12");
        assert_eq!(number_to_text(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_text(1500000000.0), "1500000000");
        assert_eq!(number_to_text(0.000001), "0.000001");
    }

    #[test]
    fn test_text_zero_has_no_sign() {
        assert_eq!(number_to_text(0.0), "0");
        assert_eq!(number_to_text(-0.0), "0");
    }

    #[test]
    fn test_text_exponential_ranges() {
        assert_eq!(number_to_text(1e21), "1e+21");
        assert_eq!(number_to_text(-2.5e22), "-2.5e+22");
        assert_eq!(number_to_text(1.5e-7), "1.5e-7");
        assert_eq!(number_to_text(1e20), "100000000000000000000");
    }

    #[test]
    fn test_text_sentinels() {
        assert_eq!(number_to_text(f64::NAN), "NaN");
        assert_eq!(number_to_text(f64::INFINITY), "Infinity");
        assert_eq!(number_to_text(f64::NEG_INFINITY), "-Infinity");
    }
}
