//! Bubblechart CLI
//!
//! Offline companion to the API server:
//! - Render a figure to JSON
//! - Validate the input datasets
//! - Generate a default config file

use anyhow::Context;
use bubblechart::config::{generate_default_config, Config};
use bubblechart::data::Datasets;
use bubblechart::figure::{build_figure, ChartMode, Locale};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bubblechart")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Women's freedom vs. happiness bubble charts")]
#[command(long_about = "Prepares the freedom/happiness datasets and renders them as Plotly figure JSON.\nThe temporal chart animates by year; the delta chart shows the decade change.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ./config.toml, then user and system locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Temporal dataset, overrides the config
    #[arg(long, global = true)]
    pub temporal: Option<PathBuf>,

    /// Delta dataset, overrides the config
    #[arg(long, global = true)]
    pub delta: Option<PathBuf>,

    /// Figure language (en, ca)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a figure as JSON
    Render {
        /// Chart mode (temporal, delta)
        #[arg(short, long, default_value = "temporal")]
        mode: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Load both datasets and build every figure
    Validate,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    // stdout carries figure JSON, so logs go to stderr
    bubblechart::logging::init_with_writer(&config.logging, std::io::stderr)
        .context("failed to initialise logging")?;

    match cli.command {
        Commands::Render {
            mode,
            output,
            pretty,
        } => {
            let mode: ChartMode = mode.parse()?;
            let datasets = load_datasets(&config)?;
            let figure = build_figure(mode, &datasets, &config.figure)?;

            let json = if pretty {
                serde_json::to_string_pretty(&figure)?
            } else {
                serde_json::to_string(&figure)?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    eprintln!("Wrote {} figure to {:?}", mode, path);
                }
                None => println!("{}", json),
            }
        }

        Commands::Validate => {
            let datasets = load_datasets(&config)?;
            let summary = datasets.summary();

            println!("Temporal records: {}", summary.temporal_records);
            println!("Delta records:    {}", summary.delta_records);
            println!("Countries:        {}", summary.countries);
            println!(
                "Years:            {}",
                summary
                    .years
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!();
            println!("Regions:");
            for region in &summary.regions {
                println!("  {}", region);
            }
            println!("Quartiles:");
            for quartile in &summary.quartiles {
                println!("  {}", quartile);
            }
            println!();

            for mode in ChartMode::all() {
                let figure = build_figure(*mode, &datasets, &config.figure)?;
                println!(
                    "{:<10} {} traces, {} frames, {} annotations",
                    mode.as_str(),
                    figure.data.len(),
                    figure.frames.len(),
                    figure.layout.annotations.len()
                );
            }

            println!();
            println!("OK");
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {:?}", path))?;
                    eprintln!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(path) = &cli.temporal {
        config.data.temporal_csv = path.clone();
    }
    if let Some(path) = &cli.delta {
        config.data.delta_csv = path.clone();
    }
    if let Some(locale) = cli.locale {
        config.figure.locale = locale;
    }

    Ok(config)
}

fn load_datasets(config: &Config) -> anyhow::Result<Datasets> {
    Datasets::load(&config.data.temporal_csv, &config.data.delta_csv).with_context(|| {
        format!(
            "failed to load datasets {:?} and {:?}",
            config.data.temporal_csv, config.data.delta_csv
        )
    })
}
