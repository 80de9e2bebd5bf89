//! Display formatting for the calculator readout.
//!
//! Formatting is purely presentational: the engine keeps the raw display
//! text and only the rendered string is rounded or abbreviated.

use super::number::{number_to_text, parse_number};

/// Magnitudes below this render as `0`.
const SMALL_THRESHOLD: f64 = 1e-6;

/// Magnitudes at or above this render in exponential notation.
const LARGE_THRESHOLD: f64 = 1e9;

/// Fractional digits used for exponential notation.
const EXPONENT_DIGITS: usize = 2;

/// Format the display text for the readout.
///
/// Text that does not start with a number (such as `NaN`) is passed through
/// unchanged.
pub fn format_display(value: &str) -> String {
    let num = parse_number(value);
    if num.is_nan() {
        return value.to_string();
    }

    if num == 0.0 || num.abs() < SMALL_THRESHOLD {
        return "0".to_string();
    }

    if num.abs() >= LARGE_THRESHOLD {
        return to_exponential(num, EXPONENT_DIGITS);
    }

    number_to_text(num)
}

/// Significant digits used to read the exact decimal value before rounding.
const EXACT_DIGITS: usize = 40;

/// Exponential notation with a fixed number of fractional digits.
///
/// Ties round away from zero (`1.125e9` becomes `1.13e+9`). Rust's own
/// `{:.2e}` rounds ties to even, so the mantissa is rounded by hand from a
/// wide rendering of the exact value.
fn to_exponential(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return number_to_text(value);
    }
    round_exponential(value.abs(), digits)
        .map(|(mantissa, exponent)| {
            let sign = if value < 0.0 { "-" } else { "" };
            let exponent_sign = if exponent < 0 { "-" } else { "+" };
            format!("{sign}{mantissa}e{exponent_sign}{}", exponent.abs())
        })
        .unwrap_or_else(|| number_to_text(value))
}

/// Round a non-negative value to `digits + 1` significant digits, half up.
///
/// Returns the mantissa text (`"1.13"`) and the decimal exponent.
fn round_exponential(magnitude: f64, digits: usize) -> Option<(String, i32)> {
    let exact = format!("{magnitude:.EXACT_DIGITS$e}");
    let (mantissa, exponent) = exact.split_once('e')?;
    let mut exponent: i32 = exponent.parse().ok()?;

    let all_digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let keep = digits + 1;
    let mut kept = all_digits.get(..keep)?.to_vec();

    if *all_digits.get(keep)? >= 5 {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        // 9.995e9 rounds up to 1.00e10.
        if carry {
            kept.insert(0, 1);
            kept.pop();
            exponent += 1;
        }
    }

    let mut text: String = kept.iter().map(|d| char::from(b'0' + d)).collect();
    if digits > 0 {
        text.insert(1, '.');
    }
    Some((text, exponent))
}
