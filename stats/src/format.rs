//! Number and cell formatting shared by every renderer.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde_json::Value;

use crate::metrics::{self, Precision};

/// Placeholder for missing values.
pub const MISSING: &str = "-";

/// Numeric keys printed without digit grouping.
const UNGROUPED_KEYS: [&str; 5] = ["season", "year", "rank", "game_month", "month"];

/// Read a number from a JSON value, accepting numeric strings.
#[must_use]
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Round to an integer and group thousands with commas (`1234567` -> `1,234,567`).
#[must_use]
pub fn format_integer(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format with a fixed number of decimals.
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Format a metric value using its precision bucket.
///
/// Unknown metrics render whole numbers as integers and anything else with
/// three decimals.
#[must_use]
pub fn format_metric_value(metric: &str, value: f64) -> String {
    match metrics::lookup(metric).map(|m| m.precision) {
        Some(Precision::Count) => format_integer(value),
        Some(precision) => format_fixed(value, precision.decimals()),
        None if value.fract() == 0.0 => format_integer(value),
        None => format_fixed(value, 3),
    }
}

/// Format an optional metric value, using [`MISSING`] when absent.
#[must_use]
pub fn format_metric_option(metric: &str, value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| format_metric_value(metric, v))
}

/// Format one table cell.
///
/// Numbers in `decimal_columns` get three decimals; every other number is a
/// comma-grouped integer, except years and ordinals. Strings pass through.
#[must_use]
pub fn format_cell(key: &str, value: &Value, decimal_columns: &[String]) -> String {
    match value {
        Value::Null => MISSING.to_owned(),
        Value::Number(n) => {
            let Some(v) = n.as_f64() else {
                return n.to_string();
            };
            if decimal_columns.iter().any(|c| c == key) {
                format_fixed(v, 3)
            } else if UNGROUPED_KEYS.contains(&key) {
                format_fixed(v, 0)
            } else {
                format_integer(v)
            }
        }
        Value::String(s) if s.is_empty() => MISSING.to_owned(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
