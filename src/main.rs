//! CLI entry point for the weather comparison engine.
//!
//! Provides subcommands for building the full dashboard report bundle,
//! appending the 7-day comparison table to CSV, and running one-shot
//! daily aggregations over a location's historical data.

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use weather_compare::analysis::aggregate::{AggregationOp, daily_aggregate, distinct_dates};
use weather_compare::analysis::compare::{FORECAST_TABLE_DAYS, daily_comparison};
use weather_compare::datasets::Location;
use weather_compare::loader::load_dashboard;
use weather_compare::output::{append_comparison_rows, write_json};
use weather_compare::report::build_report;

#[derive(Parser)]
#[command(name = "weather_compare")]
#[command(about = "Compares weather between Oneonta, NY and Greenville, SC", long_about = None)]
struct Cli {
    /// Data source holding the pre-generated JSON documents: a local
    /// directory or an HTTP base URL
    #[arg(short, long)]
    source: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full dashboard report bundle and write it as JSON
    Report {
        /// Output file for the report bundle
        #[arg(short, long, default_value = "out/dashboard.json")]
        output: String,
    },
    /// Append the 7-day daily comparison table to a CSV file
    Table {
        /// CSV file to append rows to
        #[arg(short, long, default_value = "out/comparison.csv")]
        output: String,
    },
    /// Aggregate one hourly metric of a location's historical data by day
    Daily {
        /// Location whose historical dataset to aggregate
        #[arg(value_enum)]
        location: Location,

        /// Hourly metric name, e.g. temperature_2m or precipitation
        metric: String,

        /// Reduction to apply per day: sum, avg, max or min
        #[arg(short, long, default_value = "avg")]
        op: AggregationOp,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/weather_compare.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("weather_compare.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let source = cli
        .source
        .or_else(|| std::env::var("WEATHER_DATA_SOURCE").ok())
        .unwrap_or_else(|| "data".to_string());

    // Load-phase failures surface as a single user-facing notice with the
    // details in the logs; anything else prints its own message.
    if let Err(e) = run(cli.command, &source).await {
        error!(error = ?e, "Run failed");
        if is_load_failure(&e) {
            eprintln!("Failed to load weather data: check the data source and try again.");
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Load failures always carry an I/O, HTTP, or JSON decode cause somewhere
/// in the context chain.
fn is_load_failure(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause.is::<std::io::Error>()
            || cause.is::<reqwest::Error>()
            || cause.is::<serde_json::Error>()
    })
}

async fn run(command: Commands, source: &str) -> Result<()> {
    match command {
        Commands::Report { output } => {
            let data = load_dashboard(source).await?;
            let report = build_report(&data, Utc::now().naive_utc())?;

            write_json(&output, &report)?;
            info!(output, "Dashboard report written");
        }
        Commands::Table { output } => {
            let data = load_dashboard(source).await?;
            let secondary = data
                .secondary
                .forecast
                .as_ref()
                .context("Greenville forecast data not available")?;

            let rows = daily_comparison(
                &data.primary.forecast.daily,
                &secondary.daily,
                FORECAST_TABLE_DAYS,
            );
            append_comparison_rows(&output, &rows)?;
            info!(rows = rows.len(), output, "Comparison table appended");
        }
        Commands::Daily {
            location,
            metric,
            op,
        } => {
            let data = load_dashboard(source).await?;
            let hourly = match location {
                Location::Oneonta => &data.primary.historical.hourly,
                Location::Greenville => {
                    &data
                        .secondary
                        .historical
                        .as_ref()
                        .context("Greenville historical data not available")?
                        .hourly
                }
            };

            let values = hourly
                .series(&metric)
                .ok_or_else(|| anyhow!("unknown hourly metric: {metric}"))?;

            let dates = distinct_dates(&hourly.time);
            let reduced = daily_aggregate(&hourly.time, values, op)?;

            info!(
                location = location.display_name(),
                metric,
                days = reduced.len(),
                "Daily aggregation complete"
            );
            for (date, value) in dates.iter().zip(&reduced) {
                info!(date = %date, value, "Daily value");
            }
        }
    }

    Ok(())
}
