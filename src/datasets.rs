//! Serde schemas for the pre-generated Open-Meteo JSON documents.
//!
//! Arrays within a block are index-aligned and equal length by contract of
//! the data producer script: `time[i]` belongs to every value at index `i`
//! in the same block. Units are Fahrenheit, inches, mph, and seconds of
//! sunshine per hour.

use clap::ValueEnum;
use serde::Deserialize;

/// The two fixed comparison sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Location {
    Oneonta,
    Greenville,
}

impl Location {
    /// File-name slug used by the data producer, e.g. `oneonta_forecast.json`.
    pub fn slug(&self) -> &'static str {
        match self {
            Location::Oneonta => "oneonta",
            Location::Greenville => "greenville",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Oneonta => "Oneonta, NY",
            Location::Greenville => "Greenville, SC",
        }
    }
}

/// 16-day forecast document: hourly readings plus daily summaries.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDataset {
    pub hourly: HourlyBlock,
    pub daily: DailyBlock,
}

/// Past-30-days document. Same hourly shape as the forecast.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalDataset {
    pub hourly: HourlyBlock,
}

/// Full-year document of daily mean temperatures.
#[derive(Debug, Clone, Deserialize)]
pub struct YearlyDataset {
    pub daily: YearlyDailyBlock,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub sunshine_duration: Vec<f64>,
    #[serde(default)]
    pub apparent_temperature: Vec<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<f64>,
    #[serde(default)]
    pub wind_speed_10m: Vec<f64>,
    #[serde(default)]
    pub wind_direction_10m: Vec<f64>,
    #[serde(default)]
    pub uv_index: Vec<f64>,
    #[serde(default)]
    pub dew_point_2m: Vec<f64>,
    #[serde(default)]
    pub weather_code: Vec<u32>,
}

impl HourlyBlock {
    /// Resolves an hourly metric name to its value array.
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        let values = match name {
            "temperature_2m" => &self.temperature_2m,
            "precipitation" => &self.precipitation,
            "sunshine_duration" => &self.sunshine_duration,
            "apparent_temperature" => &self.apparent_temperature,
            "relative_humidity_2m" => &self.relative_humidity_2m,
            "wind_speed_10m" => &self.wind_speed_10m,
            "wind_direction_10m" => &self.wind_direction_10m,
            "uv_index" => &self.uv_index,
            "dew_point_2m" => &self.dew_point_2m,
            _ => return None,
        };
        Some(values)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    #[serde(default)]
    pub sunrise: Vec<String>,
    #[serde(default)]
    pub sunset: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<f64>,
    pub uv_index_max: Vec<f64>,
    #[serde(default)]
    pub weather_code: Vec<u32>,
    /// Not every producer run includes daily sunshine; consumers fall back
    /// to an empty series.
    #[serde(default)]
    pub sunshine_duration: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearlyDailyBlock {
    pub time: Vec<String>,
    pub temperature_2m_mean: Vec<f64>,
}
