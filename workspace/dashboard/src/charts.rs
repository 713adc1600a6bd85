//! Chart datasets derived from a newest-first series.
//!
//! Both charts read the most recent records and present them oldest to
//! newest. The renderer draws them as-is; tick positions and labels are
//! precomputed so every renderer shows the same `k`-abbreviated axis.

use common::MonthlyRecord;

use crate::format::{axis_ticks, format_tick};

/// Months shown on the households/persondays trend chart.
pub const TREND_MONTHS: usize = 12;
/// Months shown on the households bar chart.
pub const BAR_MONTHS: usize = 8;

/// A zero-based value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub tick_values: Vec<f64>,
    pub tick_labels: Vec<String>,
}

impl AxisScale {
    pub fn for_values(values: &[i64]) -> Self {
        let max = values.iter().copied().max().unwrap_or(0);
        let tick_values = axis_ticks(max as f64);
        let tick_labels = tick_values.iter().map(|v| format_tick(*v)).collect();
        Self {
            tick_values,
            tick_labels,
        }
    }

    /// Upper bound of the axis.
    pub fn top(&self) -> f64 {
        self.tick_values.last().copied().unwrap_or(0.0)
    }
}

/// Households as bars on the left axis, persondays as a line on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub labels: Vec<String>,
    pub households: Vec<i64>,
    pub persondays: Vec<i64>,
    pub households_axis: AxisScale,
    pub persondays_axis: AxisScale,
}

impl TrendChart {
    pub fn from_series(series: &[MonthlyRecord]) -> Self {
        let slice = chronological(series, TREND_MONTHS);
        let households: Vec<i64> = slice.iter().map(|r| r.households_worked).collect();
        let persondays: Vec<i64> = slice.iter().map(|r| r.persondays).collect();
        Self {
            labels: month_labels(&slice),
            households_axis: AxisScale::for_values(&households),
            persondays_axis: AxisScale::for_values(&persondays),
            households,
            persondays,
        }
    }
}

/// Households for the most recent months as a single bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub households: Vec<i64>,
    pub axis: AxisScale,
}

impl BarChart {
    pub fn from_series(series: &[MonthlyRecord]) -> Self {
        let slice = chronological(series, BAR_MONTHS);
        let households: Vec<i64> = slice.iter().map(|r| r.households_worked).collect();
        Self {
            labels: month_labels(&slice),
            axis: AxisScale::for_values(&households),
            households,
        }
    }
}

/// First `limit` records of a newest-first series, oldest first.
fn chronological(series: &[MonthlyRecord], limit: usize) -> Vec<&MonthlyRecord> {
    series.iter().take(limit).rev().collect()
}

fn month_labels(records: &[&MonthlyRecord]) -> Vec<String> {
    records.iter().map(|r| r.month.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::sample_series;

    fn long_series(months: usize) -> Vec<MonthlyRecord> {
        // newest first: m00 is the latest month
        (0..months)
            .map(|i| MonthlyRecord::new(format!("m{:02}", i), 1000 + i as i64, 5000 + i as i64, 0, None))
            .collect()
    }

    #[test]
    fn test_trend_uses_first_twelve_reversed() {
        let series = long_series(15);
        let chart = TrendChart::from_series(&series);
        let expected: Vec<String> = (0..12).rev().map(|i| format!("m{:02}", i)).collect();
        assert_eq!(chart.labels, expected);
        assert_eq!(chart.households.first(), Some(&1011));
        assert_eq!(chart.households.last(), Some(&1000));
        assert_eq!(chart.persondays.last(), Some(&5000));
    }

    #[test]
    fn test_bar_uses_first_eight_reversed() {
        let series = long_series(12);
        let chart = BarChart::from_series(&series);
        let expected: Vec<String> = (0..8).rev().map(|i| format!("m{:02}", i)).collect();
        assert_eq!(chart.labels, expected);
        assert_eq!(chart.households, vec![1007, 1006, 1005, 1004, 1003, 1002, 1001, 1000]);
    }

    #[test]
    fn test_short_series_is_fully_used() {
        let chart = TrendChart::from_series(&sample_series());
        assert_eq!(chart.labels.len(), 10);
        assert_eq!(chart.labels.first().map(String::as_str), Some("2025-01"));
        assert_eq!(chart.labels.last().map(String::as_str), Some("2025-10"));
    }

    #[test]
    fn test_axes_start_at_zero_and_cover_data() {
        let chart = TrendChart::from_series(&sample_series());
        assert_eq!(chart.households_axis.tick_values.first(), Some(&0.0));
        assert!(chart.households_axis.top() >= 221000.0);
        assert!(chart.persondays_axis.top() >= 760000.0);
        assert_eq!(chart.households_axis.tick_labels.last().map(String::as_str), Some("250k"));
    }

    #[test]
    fn test_empty_series_gives_empty_chart() {
        let chart = BarChart::from_series(&[]);
        assert!(chart.labels.is_empty());
        assert_eq!(chart.axis.tick_values, vec![0.0]);
    }
}
