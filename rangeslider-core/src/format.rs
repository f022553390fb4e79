//! Text boundary for numeric input fields, and readout formatting.
//!
//! The input fields show whole numbers: decimal style with `,` grouping, no
//! fraction digits, ties rounded away from zero. Parsing is lenient about
//! grouping separators and a fractional part (it rounds), but rejects
//! anything that is not a plain decimal number, so non-numeric text never
//! reaches a handle.

use crate::error::InputError;

/// Whole-number formatter for the value text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerFormatter {
    pub grouping_separator: Option<char>,
}

impl Default for IntegerFormatter {
    fn default() -> Self {
        Self {
            grouping_separator: Some(','),
        }
    }
}

impl IntegerFormatter {
    pub fn new(grouping_separator: Option<char>) -> Self {
        Self { grouping_separator }
    }

    /// Parse field text into a whole number, rounding half away from zero.
    pub fn parse(&self, text: &str) -> Result<f64, InputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }

        let cleaned: String = trimmed
            .chars()
            .filter(|c| Some(*c) != self.grouping_separator)
            .collect();
        if !is_plain_decimal(&cleaned) {
            return Err(InputError::NotNumeric(trimmed.to_string()));
        }

        cleaned
            .parse::<f64>()
            .map(f64::round)
            .map_err(|_| InputError::NotNumeric(trimmed.to_string()))
    }

    /// Render `value` as a whole number with grouping.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let rounded = value.round();
        let digits = format!("{:.0}", rounded.abs());
        let grouped = match self.grouping_separator {
            Some(sep) => group_digits(&digits, sep),
            None => digits,
        };
        // -0 renders as 0
        if rounded < 0.0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }
}

/// Two-decimal rendering used for the gap readouts. Negative gaps keep
/// their sign.
pub fn format_gap(value: f64) -> String {
    format!("{value:.2}")
}

/// Optional sign, then digits with at most one `.`, at least one digit.
fn is_plain_decimal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let mut digits = 0;
    let mut dots = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
