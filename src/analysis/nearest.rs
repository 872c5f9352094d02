//! Nearest-instant lookup over timestamp sequences.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use super::error::SeriesError;

/// Parses a dataset timestamp.
///
/// The data producer emits minute precision (`2025-08-27T14:00`) for hourly
/// blocks and date-only values for daily blocks; a seconds form is accepted
/// for completeness.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, SeriesError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|_| SeriesError::BadTimestamp(raw.to_string()))
}

/// Returns the date portion of a timestamp: everything before the `T`
/// separator, or the whole string for date-only values.
pub fn date_part(raw: &str) -> &str {
    match raw.find('T') {
        Some(i) => &raw[..i],
        None => raw,
    }
}

/// Index of the timestamp closest to `target`.
///
/// Ties go to the earliest index. The scan is linear, so unsorted input
/// still yields the global minimum.
pub fn nearest_index(times: &[String], target: NaiveDateTime) -> Result<usize, SeriesError> {
    if times.is_empty() {
        return Err(SeriesError::EmptyInput);
    }

    let mut best = 0;
    let mut best_diff = distance(&times[0], target)?;

    for (i, raw) in times.iter().enumerate().skip(1) {
        let diff = distance(raw, target)?;
        if diff < best_diff {
            best_diff = diff;
            best = i;
        }
    }

    Ok(best)
}

fn distance(raw: &str, target: NaiveDateTime) -> Result<TimeDelta, SeriesError> {
    Ok((parse_timestamp(raw)? - target).abs())
}
