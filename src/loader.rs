//! One-shot concurrent load of the six weather documents.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::datasets::{ForecastDataset, HistoricalDataset, Location, YearlyDataset};
use crate::fetch::{self, BasicClient};

/// Immutable snapshot of everything the dashboard consumes. Built once
/// per run and passed by reference into the pure analysis functions.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub primary: LocationData,
    pub secondary: SecondaryData,
}

/// The mandatory Oneonta documents. If any of these fails to load the
/// whole initialization aborts.
#[derive(Debug, Clone)]
pub struct LocationData {
    pub forecast: ForecastDataset,
    pub historical: HistoricalDataset,
    pub yearly: YearlyDataset,
}

/// The Greenville documents are optional: each failed fetch leaves `None`
/// and the rest of the dashboard degrades around it.
#[derive(Debug, Clone, Default)]
pub struct SecondaryData {
    pub forecast: Option<ForecastDataset>,
    pub historical: Option<HistoricalDataset>,
    pub yearly: Option<YearlyDataset>,
}

/// Loads all six documents concurrently from `source`, an HTTP base URL
/// or a local directory.
///
/// All requests are issued in one batch; the caller resumes once every
/// one has settled. Primary failures abort, secondary failures are
/// isolated per document. No retries and no caching.
pub async fn load_dashboard(source: &str) -> Result<DashboardData> {
    let client = BasicClient::new();

    let (p_forecast, p_historical, p_yearly, s_forecast, s_historical, s_yearly) = tokio::join!(
        load_dataset::<ForecastDataset>(&client, source, Location::Oneonta, "forecast"),
        load_dataset::<HistoricalDataset>(&client, source, Location::Oneonta, "historical"),
        load_dataset::<YearlyDataset>(&client, source, Location::Oneonta, "yearly_daily"),
        load_dataset::<ForecastDataset>(&client, source, Location::Greenville, "forecast"),
        load_dataset::<HistoricalDataset>(&client, source, Location::Greenville, "historical"),
        load_dataset::<YearlyDataset>(&client, source, Location::Greenville, "yearly_daily"),
    );

    let primary = LocationData {
        forecast: p_forecast.context("mandatory Oneonta forecast dataset failed to load")?,
        historical: p_historical.context("mandatory Oneonta historical dataset failed to load")?,
        yearly: p_yearly.context("mandatory Oneonta yearly dataset failed to load")?,
    };

    let secondary = SecondaryData {
        forecast: optional(s_forecast, "forecast"),
        historical: optional(s_historical, "historical"),
        yearly: optional(s_yearly, "yearly_daily"),
    };

    info!(source, "Weather data loaded");
    Ok(DashboardData { primary, secondary })
}

fn optional<T>(result: Result<T>, kind: &str) -> Option<T> {
    match result {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            warn!(dataset = kind, error = %e, "Secondary dataset unavailable");
            None
        }
    }
}

async fn load_dataset<T: DeserializeOwned>(
    client: &BasicClient,
    source: &str,
    location: Location,
    kind: &str,
) -> Result<T> {
    let name = format!("{}_{}.json", location.slug(), kind);

    if source.starts_with("http") {
        let url = format!("{}/{}", source.trim_end_matches('/'), name);
        fetch::fetch_json(client, &url).await
    } else {
        let path = Path::new(source).join(&name);
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("malformed JSON in {}", path.display()))
    }
}
