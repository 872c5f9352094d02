//! Assembly of the serializable dashboard artifacts.
//!
//! Everything here is a pure map from the loaded snapshot to output
//! structures; the writers in [`crate::output`] persist them. The chart
//! structures are the interface handed to whatever renders them.

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::analysis::aggregate::{AggregationOp, daily_aggregate};
use crate::analysis::align::align_timestamps;
use crate::analysis::compare::{
    ComparisonRow, FORECAST_TABLE_DAYS, PrecipDelta, daily_comparison, precipitation_deltas,
};
use crate::analysis::error::SeriesError;
use crate::analysis::monthly::{MonthlyMeans, monthly_mean_temperature};
use crate::analysis::nearest::{nearest_index, parse_timestamp};
use crate::analysis::utility::round1;
use crate::analysis::window::window;
use crate::datasets::{ForecastDataset, HistoricalDataset, HourlyBlock, Location};
use crate::icons::weather_icon;
use crate::loader::DashboardData;

/// Historical daily charts show at most this many labels.
pub const HISTORICAL_LABEL_CAP: usize = 30;

/// Hours shown in the hourly strips (one day).
pub const HOURLY_STRIP_HOURS: usize = 24;

/// Hours in the forecast comparison window (seven days).
pub const FORECAST_WINDOW_HOURS: usize = 168;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Metric table for the historical daily charts: hourly metric, chart
/// title, per-day reduction, and a scale applied after reduction.
static HISTORICAL_METRICS: &[(&str, &str, AggregationOp, f64)] = &[
    ("temperature_2m", "Temperature (°F)", AggregationOp::Avg, 1.0),
    ("precipitation", "Precipitation (in)", AggregationOp::Sum, 1.0),
    (
        "sunshine_duration",
        "Sunshine (hours)",
        AggregationOp::Sum,
        1.0 / SECONDS_PER_HOUR,
    ),
    ("wind_speed_10m", "Wind Speed (mph)", AggregationOp::Avg, 1.0),
    (
        "relative_humidity_2m",
        "Humidity (%)",
        AggregationOp::Avg,
        1.0,
    ),
    ("uv_index", "UV Index", AggregationOp::Max, 1.0),
];

/// Label axis plus one series per location. The secondary side is absent
/// when its dataset failed to load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub primary: Vec<f64>,
    pub secondary: Option<Vec<f64>>,
}

/// Nearest-hour readings plus today's sun times for one location.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub location: String,
    pub icon: &'static str,
    pub temperature_f: f64,
    pub feels_like_f: f64,
    pub humidity_percent: f64,
    pub wind_speed_mph: f64,
    pub wind_direction_deg: f64,
    pub uv_index: f64,
    pub precipitation_in: f64,
    pub dew_point_f: f64,
    pub sunshine_minutes: f64,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

/// One hour of the per-location forecast strip.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyOutlook {
    pub time: String,
    pub icon: &'static str,
    pub temperature_f: f64,
    pub precipitation_in: f64,
}

/// One entry of the seven-day outlook strip.
#[derive(Debug, Clone, Serialize)]
pub struct DailyOutlook {
    pub date: String,
    pub icon: &'static str,
    pub high_f: f64,
    pub low_f: f64,
    pub precipitation_in: f64,
    pub precipitation_probability: f64,
    pub uv_index_max: f64,
}

/// 168-hour slices of the three headline hourly metrics for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyWindowSeries {
    pub temperature: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub sunshine_hours: Vec<f64>,
}

/// Shared-axis forecast window for both locations, sliced from the
/// current-hour index.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyComparison {
    pub labels: Vec<String>,
    pub primary: HourlyWindowSeries,
    pub secondary: HourlyWindowSeries,
}

/// Everything the comparison tab consumes. Only built when the secondary
/// forecast is available.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastComparison {
    pub daily_high_temp: ChartSeries,
    pub daily_precipitation: ChartSeries,
    pub daily_sunshine_hours: ChartSeries,
    pub daily_wind_avg: ChartSeries,
    pub hourly: HourlyComparison,
    pub table: Vec<ComparisonRow>,
    pub precipitation_deltas: Vec<PrecipDelta>,
}

/// The full report bundle written by the `report` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub current: Vec<CurrentConditions>,
    pub outlook_primary: Vec<DailyOutlook>,
    pub outlook_secondary: Option<Vec<DailyOutlook>>,
    pub hourly_primary: Vec<HourlyOutlook>,
    pub hourly_secondary: Option<Vec<HourlyOutlook>>,
    pub historical: Vec<ChartSeries>,
    pub monthly_temperature: Option<MonthlyMeans>,
    pub comparison: Option<ForecastComparison>,
}

/// Builds the whole report from the snapshot.
///
/// `now` is passed in explicitly; nothing below reads the clock. The
/// current-hour index comes from the primary forecast and is reused for
/// the secondary location, whose hourly axis has the same cadence.
pub fn build_report(data: &DashboardData, now: NaiveDateTime) -> Result<DashboardReport> {
    let hour_index = nearest_index(&data.primary.forecast.hourly.time, now)?;
    let today = now.format("%Y-%m-%d").to_string();

    let mut current = vec![current_conditions(
        Location::Oneonta,
        &data.primary.forecast,
        hour_index,
        &today,
    )];

    let (outlook_secondary, hourly_secondary) = match &data.secondary.forecast {
        Some(forecast) => {
            current.push(current_conditions(
                Location::Greenville,
                forecast,
                hour_index,
                &today,
            ));
            (
                Some(seven_day_outlook(forecast)),
                Some(hourly_outlook(forecast, hour_index)),
            )
        }
        None => {
            warn!("Greenville forecast unavailable, omitting its conditions and outlook");
            (None, None)
        }
    };

    let historical = historical_charts(
        &data.primary.historical,
        data.secondary.historical.as_ref(),
    )?;

    let monthly_temperature = match &data.secondary.yearly {
        Some(yearly) => Some(monthly_mean_temperature(
            &data.primary.yearly.daily,
            &yearly.daily,
        )),
        None => {
            warn!("Greenville yearly data unavailable, omitting monthly temperature chart");
            None
        }
    };

    let comparison = data
        .secondary
        .forecast
        .as_ref()
        .map(|secondary| forecast_comparison(&data.primary.forecast, secondary, now))
        .transpose()?;

    Ok(DashboardReport {
        generated_at: Utc::now(),
        current,
        outlook_primary: seven_day_outlook(&data.primary.forecast),
        outlook_secondary,
        hourly_primary: hourly_outlook(&data.primary.forecast, hour_index),
        hourly_secondary,
        historical,
        monthly_temperature,
        comparison,
    })
}

/// Readings at `hour_index` of the forecast's hourly block, with today's
/// sunrise/sunset looked up by date match in the daily block.
///
/// The index comes from the primary location's axis; a secondary block
/// that ends before it reads 0.0 instead of aborting.
pub fn current_conditions(
    location: Location,
    forecast: &ForecastDataset,
    hour_index: usize,
    today: &str,
) -> CurrentConditions {
    let hourly = &forecast.hourly;
    let daily = &forecast.daily;
    let today_index = daily.time.iter().position(|d| d == today);

    CurrentConditions {
        location: location.display_name().to_string(),
        icon: weather_icon(hourly.weather_code.get(hour_index).copied().unwrap_or(u32::MAX)),
        temperature_f: at(&hourly.temperature_2m, hour_index).round(),
        feels_like_f: at(&hourly.apparent_temperature, hour_index).round(),
        humidity_percent: at(&hourly.relative_humidity_2m, hour_index),
        wind_speed_mph: at(&hourly.wind_speed_10m, hour_index).round(),
        wind_direction_deg: at(&hourly.wind_direction_10m, hour_index),
        uv_index: round1(at(&hourly.uv_index, hour_index)),
        precipitation_in: at(&hourly.precipitation, hour_index),
        dew_point_f: at(&hourly.dew_point_2m, hour_index).round(),
        sunshine_minutes: (at(&hourly.sunshine_duration, hour_index) / 60.0).round(),
        sunrise: today_index.and_then(|i| daily.sunrise.get(i).cloned()),
        sunset: today_index.and_then(|i| daily.sunset.get(i).cloned()),
    }
}

/// The next [`HOURLY_STRIP_HOURS`] hours of a forecast from the
/// current-hour index, with per-hour glyphs. Near the end of the block the
/// strip shortens rather than padding.
pub fn hourly_outlook(forecast: &ForecastDataset, start: usize) -> Vec<HourlyOutlook> {
    let hourly = &forecast.hourly;

    window(&hourly.time, start, HOURLY_STRIP_HOURS)
        .iter()
        .enumerate()
        .map(|(offset, raw)| {
            let i = start + offset;
            HourlyOutlook {
                time: hour_label(raw),
                icon: weather_icon(hourly.weather_code.get(i).copied().unwrap_or(u32::MAX)),
                temperature_f: at(&hourly.temperature_2m, i).round(),
                precipitation_in: at(&hourly.precipitation, i),
            }
        })
        .collect()
}

/// First seven daily entries of a forecast.
pub fn seven_day_outlook(forecast: &ForecastDataset) -> Vec<DailyOutlook> {
    let daily = &forecast.daily;
    let count = FORECAST_TABLE_DAYS.min(daily.time.len());

    (0..count)
        .map(|i| DailyOutlook {
            date: daily.time[i].clone(),
            icon: weather_icon(daily.weather_code.get(i).copied().unwrap_or(u32::MAX)),
            high_f: daily.temperature_2m_max[i].round(),
            low_f: daily.temperature_2m_min[i].round(),
            precipitation_in: daily.precipitation_sum[i],
            precipitation_probability: at(&daily.precipitation_probability_max, i),
            uv_index_max: round1(daily.uv_index_max[i]),
        })
        .collect()
}

/// Daily-aggregated historical chart series for each configured metric.
///
/// The label axis merges both locations' hourly timestamps via
/// first-occurrence dedup capped at [`HISTORICAL_LABEL_CAP`]; it is not
/// chronologically sorted when the sources interleave.
pub fn historical_charts(
    primary: &HistoricalDataset,
    secondary: Option<&HistoricalDataset>,
) -> Result<Vec<ChartSeries>, SeriesError> {
    let labels: Vec<String> = match secondary {
        Some(s) => align_timestamps(
            &[&primary.hourly.time, &s.hourly.time],
            HISTORICAL_LABEL_CAP,
        ),
        None => align_timestamps(&[&primary.hourly.time], HISTORICAL_LABEL_CAP),
    }
    .iter()
    .map(|t| short_date_label(t))
    .collect();

    let mut charts = Vec::with_capacity(HISTORICAL_METRICS.len());

    for (metric, title, op, scale) in HISTORICAL_METRICS {
        let Some(values) = primary.hourly.series(metric) else {
            continue;
        };
        let primary_daily = scaled_daily(&primary.hourly.time, values, *op, *scale)?;

        let secondary_daily = match secondary {
            Some(s) => match s.hourly.series(metric) {
                Some(values) => Some(scaled_daily(&s.hourly.time, values, *op, *scale)?),
                None => None,
            },
            None => None,
        };

        charts.push(ChartSeries {
            title: title.to_string(),
            labels: labels.clone(),
            primary: primary_daily,
            secondary: secondary_daily,
        });
    }

    Ok(charts)
}

fn scaled_daily(
    times: &[String],
    values: &[f64],
    op: AggregationOp,
    scale: f64,
) -> Result<Vec<f64>, SeriesError> {
    let mut daily = daily_aggregate(times, values, op)?;
    if scale != 1.0 {
        for value in &mut daily {
            *value *= scale;
        }
    }
    Ok(daily)
}

/// Builds the comparison tab from both forecasts: seven daily chart
/// series, the 168-hour window, the daily table, and the hourly
/// precipitation deltas.
pub fn forecast_comparison(
    primary: &ForecastDataset,
    secondary: &ForecastDataset,
    now: NaiveDateTime,
) -> Result<ForecastComparison, SeriesError> {
    let start = nearest_index(&primary.hourly.time, now)?;

    let daily_labels: Vec<String> = window(&primary.daily.time, 0, FORECAST_TABLE_DAYS)
        .iter()
        .map(|d| short_date_label(d))
        .collect();

    let daily_high_temp = ChartSeries {
        title: "High Temperature (°F)".to_string(),
        labels: daily_labels.clone(),
        primary: window(&primary.daily.temperature_2m_max, 0, FORECAST_TABLE_DAYS).to_vec(),
        secondary: Some(window(&secondary.daily.temperature_2m_max, 0, FORECAST_TABLE_DAYS).to_vec()),
    };

    let daily_precipitation = ChartSeries {
        title: "Precipitation (in)".to_string(),
        labels: daily_labels.clone(),
        primary: window(&primary.daily.precipitation_sum, 0, FORECAST_TABLE_DAYS).to_vec(),
        secondary: Some(window(&secondary.daily.precipitation_sum, 0, FORECAST_TABLE_DAYS).to_vec()),
    };

    let daily_sunshine_hours = ChartSeries {
        title: "Sunshine (hours)".to_string(),
        labels: daily_labels.clone(),
        primary: daily_sunshine(primary),
        secondary: Some(daily_sunshine(secondary)),
    };

    let daily_wind_avg = ChartSeries {
        title: "Wind Speed (mph)".to_string(),
        labels: daily_labels,
        primary: daily_wind(primary)?,
        secondary: Some(daily_wind(secondary)?),
    };

    let hourly = HourlyComparison {
        labels: window(&primary.hourly.time, start, FORECAST_WINDOW_HOURS)
            .iter()
            .map(|t| hour_label(t))
            .collect(),
        primary: hourly_window_series(&primary.hourly, start),
        secondary: hourly_window_series(&secondary.hourly, start),
    };

    Ok(ForecastComparison {
        daily_high_temp,
        daily_precipitation,
        daily_sunshine_hours,
        daily_wind_avg,
        hourly,
        table: daily_comparison(&primary.daily, &secondary.daily, FORECAST_TABLE_DAYS),
        precipitation_deltas: precipitation_deltas(
            &primary.hourly,
            &secondary.hourly,
            start,
            HOURLY_STRIP_HOURS,
        ),
    })
}

fn hourly_window_series(hourly: &HourlyBlock, start: usize) -> HourlyWindowSeries {
    HourlyWindowSeries {
        temperature: window(&hourly.temperature_2m, start, FORECAST_WINDOW_HOURS).to_vec(),
        precipitation: window(&hourly.precipitation, start, FORECAST_WINDOW_HOURS).to_vec(),
        sunshine_hours: window(&hourly.sunshine_duration, start, FORECAST_WINDOW_HOURS)
            .iter()
            .map(|s| s / SECONDS_PER_HOUR)
            .collect(),
    }
}

/// First seven daily sunshine totals in hours, or empty when the producer
/// run omitted the field.
fn daily_sunshine(forecast: &ForecastDataset) -> Vec<f64> {
    forecast
        .daily
        .sunshine_duration
        .as_deref()
        .map(|values| {
            window(values, 0, FORECAST_TABLE_DAYS)
                .iter()
                .map(|s| s / SECONDS_PER_HOUR)
                .collect()
        })
        .unwrap_or_default()
}

/// Daily average wind over the first seven days, aggregated from the
/// hourly series.
fn daily_wind(forecast: &ForecastDataset) -> Result<Vec<f64>, SeriesError> {
    let mut daily = daily_aggregate(
        &forecast.hourly.time,
        &forecast.hourly.wind_speed_10m,
        AggregationOp::Avg,
    )?;
    daily.truncate(FORECAST_TABLE_DAYS);
    Ok(daily)
}

fn at(values: &[f64], index: usize) -> f64 {
    values.get(index).copied().unwrap_or(0.0)
}

/// "Mar 5" style label; unparseable input passes through unchanged.
fn short_date_label(raw: &str) -> String {
    match parse_timestamp(raw) {
        Ok(dt) => dt.format("%b %-d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "Mar 5 14:00" style label for hourly axes.
fn hour_label(raw: &str) -> String {
    match parse_timestamp(raw) {
        Ok(dt) => dt.format("%b %-d %H:00").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{DailyBlock, YearlyDailyBlock, YearlyDataset};
    use crate::loader::{LocationData, SecondaryData};

    fn hourly_times(start_day: u32, hours: usize) -> Vec<String> {
        (0..hours)
            .map(|h| {
                format!(
                    "2024-03-{:02}T{:02}:00",
                    start_day + (h / 24) as u32,
                    h % 24
                )
            })
            .collect()
    }

    fn full_hourly(hours: usize) -> HourlyBlock {
        HourlyBlock {
            time: hourly_times(1, hours),
            temperature_2m: vec![50.0; hours],
            precipitation: vec![0.1; hours],
            sunshine_duration: vec![1800.0; hours],
            apparent_temperature: vec![48.0; hours],
            relative_humidity_2m: vec![70.0; hours],
            wind_speed_10m: vec![8.0; hours],
            wind_direction_10m: vec![180.0; hours],
            uv_index: vec![3.25; hours],
            dew_point_2m: vec![40.0; hours],
            weather_code: vec![61; hours],
        }
    }

    fn full_daily(days: usize) -> DailyBlock {
        DailyBlock {
            time: (0..days).map(|d| format!("2024-03-{:02}", d + 1)).collect(),
            sunrise: (0..days)
                .map(|d| format!("2024-03-{:02}T06:30", d + 1))
                .collect(),
            sunset: (0..days)
                .map(|d| format!("2024-03-{:02}T18:15", d + 1))
                .collect(),
            temperature_2m_max: vec![55.4; days],
            temperature_2m_min: vec![33.6; days],
            precipitation_sum: vec![0.25; days],
            precipitation_probability_max: vec![40.0; days],
            uv_index_max: vec![4.44; days],
            weather_code: vec![2; days],
            sunshine_duration: Some(vec![7200.0; days]),
        }
    }

    fn forecast(hours: usize, days: usize) -> ForecastDataset {
        ForecastDataset {
            hourly: full_hourly(hours),
            daily: full_daily(days),
        }
    }

    fn snapshot() -> DashboardData {
        DashboardData {
            primary: LocationData {
                forecast: forecast(168, 7),
                historical: HistoricalDataset {
                    hourly: full_hourly(48),
                },
                yearly: YearlyDataset {
                    daily: YearlyDailyBlock {
                        time: vec!["2024-01-01".to_string(), "2024-02-01".to_string()],
                        temperature_2m_mean: vec![28.0, 31.0],
                    },
                },
            },
            secondary: SecondaryData {
                forecast: Some(forecast(168, 7)),
                historical: Some(HistoricalDataset {
                    hourly: full_hourly(48),
                }),
                yearly: Some(YearlyDataset {
                    daily: YearlyDailyBlock {
                        time: vec!["2024-01-01".to_string()],
                        temperature_2m_mean: vec![48.0],
                    },
                }),
            },
        }
    }

    fn noon_march_first() -> NaiveDateTime {
        crate::analysis::nearest::parse_timestamp("2024-03-01T12:00").unwrap()
    }

    #[test]
    fn test_current_conditions_rounding_and_sun_times() {
        let forecast = forecast(24, 7);
        let current = current_conditions(Location::Oneonta, &forecast, 3, "2024-03-01");

        assert_eq!(current.location, "Oneonta, NY");
        assert_eq!(current.icon, "🌧️");
        assert_eq!(current.temperature_f, 50.0);
        assert_eq!(current.uv_index, 3.3);
        assert_eq!(current.sunshine_minutes, 30.0);
        assert_eq!(current.sunrise.as_deref(), Some("2024-03-01T06:30"));
        assert_eq!(current.sunset.as_deref(), Some("2024-03-01T18:15"));
    }

    #[test]
    fn test_current_conditions_without_matching_day() {
        let forecast = forecast(24, 7);
        let current = current_conditions(Location::Oneonta, &forecast, 0, "1999-01-01");
        assert!(current.sunrise.is_none());
        assert!(current.sunset.is_none());
    }

    #[test]
    fn test_current_conditions_index_past_block_end() {
        let forecast = forecast(12, 7);
        let current = current_conditions(Location::Greenville, &forecast, 35, "2024-03-01");

        assert_eq!(current.temperature_f, 0.0);
        assert_eq!(current.precipitation_in, 0.0);
        assert_eq!(current.sunshine_minutes, 0.0);
        assert_eq!(current.icon, "🌤️");
    }

    #[test]
    fn test_report_survives_short_secondary_forecast() {
        let mut data = snapshot();
        data.secondary.forecast = Some(forecast(12, 7));

        // Noon on day two resolves to index 36 on the primary axis, past
        // the end of the 12-hour secondary block.
        let now = crate::analysis::nearest::parse_timestamp("2024-03-02T12:00").unwrap();
        let report = build_report(&data, now).unwrap();

        assert_eq!(report.current.len(), 2);
        assert_eq!(report.current[1].temperature_f, 0.0);
        assert!(report.hourly_secondary.as_ref().unwrap().is_empty());
        assert_eq!(report.hourly_primary.len(), HOURLY_STRIP_HOURS);
    }

    #[test]
    fn test_hourly_outlook_strip() {
        let forecast = forecast(168, 7);
        let strip = hourly_outlook(&forecast, 12);

        assert_eq!(strip.len(), HOURLY_STRIP_HOURS);
        assert_eq!(strip[0].time, "Mar 1 12:00");
        assert_eq!(strip[0].icon, "🌧️");
        assert_eq!(strip[0].temperature_f, 50.0);
    }

    #[test]
    fn test_hourly_outlook_shortens_near_block_end() {
        let forecast = forecast(30, 7);
        let strip = hourly_outlook(&forecast, 20);
        assert_eq!(strip.len(), 10);
    }

    #[test]
    fn test_seven_day_outlook() {
        let outlook = seven_day_outlook(&forecast(24, 10));
        assert_eq!(outlook.len(), 7);
        assert_eq!(outlook[0].high_f, 55.0);
        assert_eq!(outlook[0].low_f, 34.0);
        assert_eq!(outlook[0].uv_index_max, 4.4);
        assert_eq!(outlook[0].icon, "⛅");
    }

    #[test]
    fn test_historical_charts_cap_and_metrics() {
        let primary = HistoricalDataset {
            hourly: full_hourly(48),
        };
        let secondary = HistoricalDataset {
            hourly: full_hourly(48),
        };

        let charts = historical_charts(&primary, Some(&secondary)).unwrap();
        assert_eq!(charts.len(), 6);
        for chart in &charts {
            assert!(chart.labels.len() <= HISTORICAL_LABEL_CAP);
            // 48 hours of data collapse to two daily points.
            assert_eq!(chart.primary.len(), 2);
            assert_eq!(chart.secondary.as_ref().unwrap().len(), 2);
        }

        // Sunshine totals are converted to hours: 24 * 1800s = 12h.
        let sunshine = charts
            .iter()
            .find(|c| c.title == "Sunshine (hours)")
            .unwrap();
        assert!((sunshine.primary[0] - 12.0).abs() < 1e-9);

        // UV uses the daily maximum, not a sum.
        let uv = charts.iter().find(|c| c.title == "UV Index").unwrap();
        assert!((uv.primary[0] - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_historical_charts_without_secondary() {
        let primary = HistoricalDataset {
            hourly: full_hourly(24),
        };
        let charts = historical_charts(&primary, None).unwrap();
        assert!(charts.iter().all(|c| c.secondary.is_none()));
    }

    #[test]
    fn test_forecast_comparison_window_lengths() {
        let primary = forecast(168, 7);
        let secondary = forecast(168, 7);

        let comparison = forecast_comparison(&primary, &secondary, noon_march_first()).unwrap();

        // Window starts at the hour nearest noon on day one; only the
        // remaining samples fit.
        assert_eq!(comparison.hourly.primary.temperature.len(), 156);
        assert_eq!(comparison.hourly.secondary.precipitation.len(), 156);
        assert_eq!(comparison.table.len(), 7 * 4);
        assert_eq!(comparison.precipitation_deltas.len(), 24);
        assert_eq!(comparison.daily_high_temp.primary.len(), 7);
        assert_eq!(comparison.daily_wind_avg.secondary.as_ref().unwrap().len(), 7);
        assert!((comparison.daily_sunshine_hours.primary[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_report_with_full_snapshot() {
        let data = snapshot();
        let report = build_report(&data, noon_march_first()).unwrap();

        assert_eq!(report.current.len(), 2);
        assert_eq!(report.outlook_primary.len(), 7);
        assert!(report.outlook_secondary.is_some());
        assert_eq!(report.hourly_primary.len(), HOURLY_STRIP_HOURS);
        assert_eq!(
            report.hourly_secondary.as_ref().unwrap().len(),
            HOURLY_STRIP_HOURS
        );
        assert_eq!(report.historical.len(), 6);
        assert!(report.comparison.is_some());

        let monthly = report.monthly_temperature.unwrap();
        assert_eq!(monthly.labels, vec!["Jan 2024", "Feb 2024"]);
        // Greenville has no February samples, so that month reads 0.0.
        assert_eq!(monthly.secondary, vec![48.0, 0.0]);
    }

    #[test]
    fn test_build_report_degrades_without_secondary() {
        let mut data = snapshot();
        data.secondary = SecondaryData::default();

        let report = build_report(&data, noon_march_first()).unwrap();
        assert_eq!(report.current.len(), 1);
        assert!(report.outlook_secondary.is_none());
        assert!(report.hourly_secondary.is_none());
        assert!(report.monthly_temperature.is_none());
        assert!(report.comparison.is_none());
        assert!(report.historical.iter().all(|c| c.secondary.is_none()));
    }

    #[test]
    fn test_label_formats() {
        assert_eq!(short_date_label("2024-03-05T00:00"), "Mar 5");
        assert_eq!(short_date_label("2024-03-05"), "Mar 5");
        assert_eq!(hour_label("2024-03-05T09:00"), "Mar 5 09:00");
        assert_eq!(short_date_label("garbage"), "garbage");
    }
}
