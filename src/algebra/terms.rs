//! Conversions between coefficient tokens and rendered terms.

use crate::algebra::ParseError;
use smol_str::SmolStr;

/// Convert a coefficient token, as pulled out of a term by the tokenizer,
/// into its value.
///
/// A bare sign stands for a unit coefficient, so `"-"` is `-1` while `""` and
/// `"+"` are both `1`.
pub fn numify(token: &str) -> Result<f64, ParseError> {
    match token {
        "-" => Ok(-1.0),
        "" | "+" => Ok(1.0),
        other => {
            let magnitude =
                other.trim_start_matches(|c: char| c == '+' || c == '-');
            // at most one sign, at least one digit
            let well_formed = magnitude.len() + 1 >= other.len()
                && magnitude.chars().any(|c| c.is_ascii_digit())
                && magnitude.chars().all(|c| c.is_ascii_digit() || c == '.');

            if well_formed {
                if let Ok(value) = other.parse() {
                    return Ok(value);
                }
            }

            Err(ParseError::InvalidNumber {
                text: SmolStr::new(other),
            })
        },
    }
}

/// Render the term `c·xⁿ` with an explicit leading sign, where `power_marker`
/// is the superscript for `n` (see [`power_marker()`]).
///
/// Zero coefficients render as an empty string and unit coefficients are
/// left implicit. NaN has no sign and is rendered as `+NaN`.
pub fn sign_xn(coefficient: f64, power_marker: &str) -> String {
    match coefficient {
        c if c == 0.0 => String::new(),
        c if c == 1.0 => format!("+x{}", power_marker),
        c if c == -1.0 => format!("-x{}", power_marker),
        c if c > 0.0 || c.is_nan() => format!("+{}x{}", c, power_marker),
        c => format!("-{}x{}", c.abs(), power_marker),
    }
}

/// Render a constant term with an explicit leading sign.
pub fn sign_n(coefficient: f64) -> String {
    match coefficient {
        c if c == 0.0 => String::new(),
        c if c > 0.0 || c.is_nan() => format!("+{}", c),
        c => format!("-{}", c.abs()),
    }
}

/// The superscript used for `xⁿ`. The first power has no marker.
pub fn power_marker(power: usize) -> &'static str {
    match power {
        2 => "²",
        3 => "³",
        4 => "⁴",
        _ => "",
    }
}

pub(crate) fn superscript_power(marker: char) -> Option<usize> {
    match marker {
        '²' => Some(2),
        '³' => Some(3),
        '⁴' => Some(4),
        _ => None,
    }
}

/// Render a list of coefficients (highest power first) in canonical form.
pub(crate) fn render(coefficients: &[f64]) -> String {
    let highest_power = coefficients.len().saturating_sub(1);
    let mut rendered = String::new();

    for (i, &coefficient) in coefficients.iter().enumerate() {
        let power = highest_power - i;

        let term = if power == 0 {
            sign_n(coefficient)
        } else {
            sign_xn(coefficient, power_marker(power))
        };
        rendered.push_str(&term);
    }

    if rendered.starts_with('+') {
        rendered.remove(0);
    }

    if rendered.is_empty() {
        // every term was zero
        rendered.push('0');
    }

    rendered
}
