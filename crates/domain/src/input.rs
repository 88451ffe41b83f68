// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coercion of raw form input into domain values.
//!
//! Numeric input never raises: text that does not start with a number,
//! non-finite values and negative values all coerce to zero. Parsing takes
//! the longest numeric prefix, so `"12abc"` reads as 12.

use num_traits::ToPrimitive;

/// Returns the longest prefix of `text` (after leading whitespace) that
/// reads as a decimal floating point literal.
fn numeric_prefix(text: &str) -> &str {
    let trimmed: &str = text.trim_start();
    let bytes: &[u8] = trimmed.as_bytes();
    let mut end: usize = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start: usize = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits: usize = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start: usize = end + 1;
        let mut frac_end: usize = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end: usize = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start: usize = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &trimmed[..end]
}

/// Parses a leading number, yielding `None` when there is none.
#[must_use]
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let prefix: &str = numeric_prefix(text);
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok()
}

/// Coerces a currency or rate field. Anything unusable becomes 0.
#[must_use]
pub fn coerce_amount(text: &str) -> f64 {
    clamp_amount(parse_leading_number(text).unwrap_or(0.0))
}

/// Clamps an already-numeric amount to a finite, non-negative value.
#[must_use]
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerces a per-execution usage count. Fractions are truncated.
#[must_use]
pub fn coerce_count(text: &str) -> u32 {
    clamp_count(coerce_amount(text))
}

/// Converts a non-negative amount into a count, saturating at `u32::MAX`.
#[must_use]
pub fn clamp_count(value: f64) -> u32 {
    clamp_amount(value).trunc().to_u32().unwrap_or(u32::MAX)
}

/// Coerces an annual volume field. Blank input means "volume unknown".
#[must_use]
pub fn coerce_volume(text: &str) -> Option<u64> {
    if text.trim().is_empty() {
        return None;
    }
    Some(clamp_amount(coerce_amount(text)).trunc().to_u64().unwrap_or(u64::MAX))
}

/// Coerces a period length. The result is never below one month.
#[must_use]
pub fn coerce_period_months(text: &str) -> u32 {
    coerce_count(text).max(1)
}
