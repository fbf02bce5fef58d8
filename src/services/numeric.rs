//! Lenient number handling for values decoded from dashboard JSON.
//!
//! Day logs were hand-edited for months, so the same field can hold a number,
//! a numeric string ("84.2"), a string with a unit ("84.2 kg") or nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("leading number pattern is valid")
});

/// Parse the numeric prefix of a string, ignoring leading whitespace.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// A number, a numeric string, or nothing.
pub fn parse_optional(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_leading_number(text),
        _ => None,
    }
}

/// Like [`parse_optional`] but absent values count as zero.
pub fn parse_or_zero(value: &Value) -> f64 {
    parse_optional(value).unwrap_or(0.0)
}

/// First value that is present and not `null`, mirroring a chain of `??` fallbacks.
pub fn first_present<'a>(candidates: &[Option<&'a Value>]) -> Option<&'a Value> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_null())
}

/// Fixed-point formatting with half-away-from-zero rounding.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}

/// Whole numbers without decimals, everything else with one.
pub fn format_trimmed(value: f64) -> String {
    if value.fract() == 0.0 {
        format_fixed(value, 0)
    } else {
        format_fixed(value, 1)
    }
}

/// Up to two decimals, trailing zeros dropped ("92.5", "46.25", "90").
pub fn format_compact(value: f64) -> String {
    let fixed = format_fixed(value, 2);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Clamp into the closed percentage interval.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
