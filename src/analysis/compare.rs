//! Cross-location comparison structures.

use serde::Serialize;

use crate::datasets::{DailyBlock, HourlyBlock};

use super::window::window;

/// Days covered by the daily comparison table and charts.
pub const FORECAST_TABLE_DAYS: usize = 7;

/// One row of the daily comparison table.
///
/// `difference` keeps its sign: positive means the primary location reads
/// higher than the secondary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub date: String,
    pub metric: String,
    pub primary: f64,
    pub secondary: f64,
    pub difference: f64,
}

/// Builds the daily comparison table: four metrics per day, day-major order.
pub fn daily_comparison(
    primary: &DailyBlock,
    secondary: &DailyBlock,
    days: usize,
) -> Vec<ComparisonRow> {
    let count = days.min(primary.time.len()).min(secondary.time.len());
    let mut rows = Vec::with_capacity(count * 4);

    for i in 0..count {
        let date = &primary.time[i];
        let metrics = [
            (
                "High Temp",
                primary.temperature_2m_max[i],
                secondary.temperature_2m_max[i],
            ),
            (
                "Low Temp",
                primary.temperature_2m_min[i],
                secondary.temperature_2m_min[i],
            ),
            (
                "Precipitation",
                primary.precipitation_sum[i],
                secondary.precipitation_sum[i],
            ),
            (
                "UV Index",
                primary.uv_index_max[i],
                secondary.uv_index_max[i],
            ),
        ];

        for (metric, a, b) in metrics {
            rows.push(ComparisonRow {
                date: date.clone(),
                metric: metric.to_string(),
                primary: a,
                secondary: b,
                difference: a - b,
            });
        }
    }

    rows
}

/// Signed per-hour precipitation difference over a forecast window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipDelta {
    pub time: String,
    pub primary: f64,
    pub secondary: f64,
    pub difference: f64,
}

/// Hourly precipitation deltas for `hours` samples starting at the
/// current-hour index. A start past either array's end yields no rows.
pub fn precipitation_deltas(
    primary: &HourlyBlock,
    secondary: &HourlyBlock,
    start: usize,
    hours: usize,
) -> Vec<PrecipDelta> {
    let times = window(&primary.time, start, hours);
    let a = window(&primary.precipitation, start, hours);
    let b = window(&secondary.precipitation, start, hours);
    let count = times.len().min(a.len()).min(b.len());

    (0..count)
        .map(|i| PrecipDelta {
            time: times[i].clone(),
            primary: a[i],
            secondary: b[i],
            difference: a[i] - b[i],
        })
        .collect()
}
