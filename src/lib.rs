//! # Bubblechart
//!
//! Women's personal freedom vs. happiness, as bubble charts.
//!
//! Two static CSV datasets are loaded once, enriched with a min-max scaled
//! bubble size, and turned on demand into Plotly-compatible figure JSON:
//!
//! - **Temporal**: freedom index vs. happiness by region, animated by year
//! - **Delta**: decade change in freedom vs. change in happiness by quartile,
//!   with zero lines and callouts on the least and most free countries
//!
//! ## Modules
//!
//! - [`data`]: CSV loading and min-max scaling
//! - [`figure`]: Figure construction for both chart modes
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bubblechart::data::Datasets;
//! use bubblechart::figure::{build_figure, ChartMode, FigureOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let datasets = Datasets::load(
//!         Path::new("bubblechart_slider.csv"),
//!         Path::new("bubblechart_change.csv"),
//!     )?;
//!
//!     let figure = build_figure(ChartMode::Delta, &datasets, &FigureOptions::default())?;
//!     println!("{}", serde_json::to_string(&figure)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod figure;
pub mod logging;

pub use data::{
    CountryDeltaRecord, CountryYearRecord, DataError, DataResult, DatasetSummary, Datasets,
    Quartile, Region,
};

pub use figure::{
    build_figure, build_figure_str, ChartMode, Figure, FigureError, FigureOptions, FigureResult,
    Labels, Locale,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
