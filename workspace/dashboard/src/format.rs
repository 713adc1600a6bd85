//! Display formatting for figures and chart axes.

use num_format::{Locale, ToFormattedString};

/// Shown where a figure is missing.
pub const MISSING: &str = "—";

/// Approximate number of intervals on a value axis.
const TARGET_INTERVALS: f64 = 5.0;

/// Formats a count with Indian digit grouping (`12,34,567`).
pub fn format_number(value: Option<i64>) -> String {
    match value {
        Some(n) => n.to_formatted_string(&Locale::en_IN),
        None => MISSING.to_string(),
    }
}

pub fn format_currency(value: i64) -> String {
    format!("₹{}", format_number(Some(value)))
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{}%", pct),
        None => MISSING.to_string(),
    }
}

/// Axis tick label: thousands are abbreviated with `k` (`125000` -> `125k`).
pub fn format_tick(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}k", value / 1000.0)
    } else {
        format!("{}", value)
    }
}

/// Zero-based tick positions covering `0..=max`, stepping by 1, 2 or 5
/// times a power of ten. Plotted values are counts, so the step is never
/// below one.
pub fn axis_ticks(max: f64) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0];
    }
    let step = nice_step(max / TARGET_INTERVALS).round().max(1.0);
    let intervals = (max / step).ceil() as usize;
    (0..=intervals).map(|i| i as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let exponent = raw.log10().floor() as i32;
    let magnitude = 10f64.powi(exponent);
    let factor = match raw / magnitude {
        n if n <= 1.0 => 1.0,
        n if n <= 2.0 => 2.0,
        n if n <= 5.0 => 5.0,
        _ => 10.0,
    };
    factor * magnitude
}
