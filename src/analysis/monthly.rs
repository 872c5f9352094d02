//! Month-by-month mean temperature from the yearly daily datasets.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::datasets::YearlyDailyBlock;

use super::utility::{mean, round1};

static MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Chronologically ordered monthly mean temperature for both locations.
///
/// A month with no samples on one side reads as 0.0 rather than dropping
/// the label, so the two series stay the same length as the label axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyMeans {
    pub labels: Vec<String>,
    pub primary: Vec<f64>,
    pub secondary: Vec<f64>,
}

pub fn monthly_mean_temperature(
    primary: &YearlyDailyBlock,
    secondary: &YearlyDailyBlock,
) -> MonthlyMeans {
    // BTreeMap keys are "YYYY-MM", so iteration is chronological.
    let mut months: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();

    for (raw, temp) in primary.time.iter().zip(&primary.temperature_2m_mean) {
        months.entry(month_key(raw)).or_default().0.push(*temp);
    }
    for (raw, temp) in secondary.time.iter().zip(&secondary.temperature_2m_mean) {
        months.entry(month_key(raw)).or_default().1.push(*temp);
    }

    let mut out = MonthlyMeans {
        labels: Vec::with_capacity(months.len()),
        primary: Vec::with_capacity(months.len()),
        secondary: Vec::with_capacity(months.len()),
    };

    for (key, (a, b)) in &months {
        out.labels.push(month_label(key));
        out.primary.push(round1(mean(a)));
        out.secondary.push(round1(mean(b)));
    }

    out
}

fn month_key(raw: &str) -> &str {
    raw.get(..7).unwrap_or(raw)
}

/// Formats a "YYYY-MM" key as e.g. "Mar 2024". Unparseable keys pass
/// through unchanged.
fn month_label(key: &str) -> String {
    if let Some((year, month)) = key.split_once('-') {
        let index = month
            .parse::<usize>()
            .ok()
            .and_then(|m| m.checked_sub(1))
            .filter(|m| *m < 12);
        if let Some(i) = index {
            return format!("{} {}", MONTHS[i], year);
        }
    }
    key.to_string()
}
