//! Per-day reduction of hourly series.

use std::collections::HashMap;
use std::str::FromStr;

use super::error::SeriesError;
use super::nearest::date_part;
use super::utility::mean;

/// Reduction applied to each calendar day's samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationOp {
    Sum,
    Avg,
    Max,
    Min,
}

impl FromStr for AggregationOp {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Self::Sum),
            "avg" => Ok(Self::Avg),
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            other => Err(SeriesError::UnknownOperation(other.to_string())),
        }
    }
}

/// Collapses parallel time/value arrays into one value per calendar date.
///
/// Dates are keyed on the substring before the `T` separator with no
/// timezone conversion. Output order is the order each date first appears
/// in the input, never a re-sort; callers pair the result with labels
/// derived the same way.
pub fn daily_aggregate(
    times: &[String],
    values: &[f64],
    op: AggregationOp,
) -> Result<Vec<f64>, SeriesError> {
    if times.len() != values.len() {
        return Err(SeriesError::LengthMismatch {
            times: times.len(),
            values: values.len(),
        });
    }

    // The seen-dates list carries the ordering contract; the map only
    // locates buckets.
    let mut order: Vec<&str> = Vec::new();
    let mut buckets: HashMap<&str, Vec<f64>> = HashMap::new();

    for (raw, value) in times.iter().zip(values) {
        let date = date_part(raw);
        if !buckets.contains_key(date) {
            order.push(date);
        }
        buckets.entry(date).or_default().push(*value);
    }

    let reduced = order
        .iter()
        .map(|date| {
            // Every date in `order` has at least one sample.
            let day = &buckets[date];
            match op {
                AggregationOp::Sum => day.iter().sum(),
                AggregationOp::Avg => mean(day),
                AggregationOp::Max => day.iter().copied().fold(f64::MIN, f64::max),
                AggregationOp::Min => day.iter().copied().fold(f64::MAX, f64::min),
            }
        })
        .collect();

    Ok(reduced)
}

/// Distinct calendar dates of a timestamp sequence, in first-occurrence
/// order. Pairs index-for-index with [`daily_aggregate`] output.
pub fn distinct_dates(times: &[String]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    for raw in times {
        let date = date_part(raw);
        if !seen.contains(&date) {
            seen.push(date);
        }
    }
    seen.into_iter().map(|d| d.to_string()).collect()
}
