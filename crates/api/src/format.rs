// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Number formatting for the rendered report.
//!
//! Rounding is half away from zero on the magnitude, and currency uses
//! en-US conventions: a leading `$`, comma thousands separators and a
//! minus sign ahead of the symbol.

/// Placeholder shown wherever a value is unknown.
pub const MISSING_VALUE: &str = "\u{2014}";

/// Formats `value` with exactly `digits` fraction digits.
#[must_use]
pub fn to_fixed(value: f64, digits: u8) -> String {
    let scale: f64 = 10_f64.powi(i32::from(digits));
    let rounded: f64 = (value.abs() * scale).round() / scale;
    let sign: &str = if value < 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.width$}", width = usize::from(digits))
}

/// Inserts comma separators into a string of integer digits.
fn group_thousands(digits: &str) -> String {
    let len: usize = digits.len();
    let mut grouped: String = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// USD with between `min_fraction` and `max_fraction` fraction digits.
fn usd(value: f64, min_fraction: u8, max_fraction: u8) -> String {
    let fixed: String = to_fixed(value.abs(), max_fraction);
    let (integer, mut fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    while fraction.len() > usize::from(min_fraction) {
        match fraction.strip_suffix('0') {
            Some(rest) => fraction = rest,
            None => break,
        }
    }

    let sign: &str = if value < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}${}", group_thousands(integer))
    } else {
        format!("{sign}${}.{fraction}", group_thousands(integer))
    }
}

/// Formats a currency amount with exactly two fraction digits, e.g. `-$1,234.50`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    usd(value, 2, 2)
}

/// Formats a per-unit cost.
///
/// Sub-cent positive amounts always show four digits (`$0.0040`); anything
/// else shows two to four, dropping trailing zeros past the second.
#[must_use]
pub fn format_unit_cost(value: f64) -> String {
    if value > 0.0 && value < 0.01 {
        return format!("${}", to_fixed(value, 4));
    }
    usd(value, 2, 4)
}

/// Formats the combined per-unit rate of all channels.
#[must_use]
pub fn format_combined_unit_rate(value: f64) -> String {
    let digits: u8 = if value < 0.01 { 4 } else { 3 };
    format!("${}", to_fixed(value, digits))
}

/// Formats a count with thousands separators.
#[must_use]
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Formats a percentage with a fixed number of fraction digits, e.g. `149.3%`.
#[must_use]
pub fn format_percent(value: f64, digits: u8) -> String {
    format!("{}%", to_fixed(value, digits))
}

/// Formats a whole-number percentage with an explicit `+` on gains.
#[must_use]
pub fn format_signed_percent(value: f64) -> String {
    let sign: &str = if value > 0.0 { "+" } else { "" };
    format!("{sign}{}", format_percent(value, 0))
}

/// Formats the multiple of the investment returned, e.g. `2.5x`.
#[must_use]
pub fn format_multiplier(roi_percent: f64) -> String {
    format!("{}x", to_fixed(roi_percent / 100.0 + 1.0, 1))
}

/// Formats a minute count as entered, e.g. `7.5 min`.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    format!("{minutes} min")
}

/// Formats an optional currency amount, using the missing-value dash for `None`.
#[must_use]
pub fn format_optional_currency(value: Option<f64>) -> String {
    value.map_or_else(|| String::from(MISSING_VALUE), format_currency)
}
