//! Bubblechart API Server
//!
//! Run with: cargo run --bin bubblechart
//!
//! # Configuration
//!
//! Read from `BUBBLECHART_CONFIG` when set, otherwise from the default
//! locations (see [`Config::load_default`]). Environment variables:
//! - `PORT`: Port to listen on (default: 10000)
//! - `BUBBLECHART_HOST`: Host to bind to (default: 0.0.0.0)
//! - `BUBBLECHART_TEMPORAL_CSV`: Temporal dataset (default: bubblechart_slider.csv)
//! - `BUBBLECHART_DELTA_CSV`: Delta dataset (default: bubblechart_change.csv)
//! - `BUBBLECHART_LOCALE`: Figure text language, `en` or `ca` (default: en)
//! - `RUST_LOG`: Log filter (default: bubblechart=info)

use bubblechart::api::{serve, AppState};
use bubblechart::config::Config;
use bubblechart::data::Datasets;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    bubblechart::logging::init(&config.logging)?;

    tracing::info!("Starting Bubblechart API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Temporal dataset: {:?}", config.data.temporal_csv);
    tracing::info!("Delta dataset: {:?}", config.data.delta_csv);

    // Datasets are loaded once; failure here is fatal
    let datasets = Datasets::load(&config.data.temporal_csv, &config.data.delta_csv)
        .map_err(|e| {
            tracing::error!("Failed to load datasets: {}", e);
            e
        })?;

    let summary = datasets.summary();
    tracing::info!(
        countries = summary.countries,
        years = summary.years.len(),
        "Datasets ready"
    );

    let state = AppState::new(datasets, config.figure.clone());

    tracing::info!("Starting server on {}", config.server.addr());
    serve(state, &config.server).await?;

    tracing::info!("Bubblechart API server stopped");
    Ok(())
}

fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    match std::env::var("BUBBLECHART_CONFIG") {
        Ok(path) => Ok(Config::load_with_env(&PathBuf::from(path))?),
        Err(_) => Ok(Config::load_default()),
    }
}
