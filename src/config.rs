//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::figure::{FigureOptions, Locale};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub figure: FigureOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input dataset locations
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_temporal_csv")]
    pub temporal_csv: PathBuf,

    #[serde(default = "default_delta_csv")]
    pub delta_csv: PathBuf,
}

fn default_temporal_csv() -> PathBuf {
    PathBuf::from("bubblechart_slider.csv")
}

fn default_delta_csv() -> PathBuf {
    PathBuf::from("bubblechart_change.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            temporal_csv: default_temporal_csv(),
            delta_csv: default_delta_csv(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            Some(PathBuf::from("./config.toml")),
            dirs::config_dir().map(|p| p.join("bubblechart").join("config.toml")),
            Some(PathBuf::from("/etc/bubblechart/config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    ///
    /// `PORT` keeps the name hosting platforms set; everything else is
    /// prefixed with `BUBBLECHART_`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Data overrides
        if let Some(path) = lookup("BUBBLECHART_TEMPORAL_CSV") {
            self.data.temporal_csv = PathBuf::from(path);
        }
        if let Some(path) = lookup("BUBBLECHART_DELTA_CSV") {
            self.data.delta_csv = PathBuf::from(path);
        }

        // Server overrides
        if let Some(host) = lookup("BUBBLECHART_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid PORT value {:?}", port),
            }
        }

        // Figure overrides
        if let Some(locale) = lookup("BUBBLECHART_LOCALE") {
            match locale.parse::<Locale>() {
                Ok(l) => self.figure.locale = l,
                Err(e) => tracing::warn!("Ignoring BUBBLECHART_LOCALE: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("BUBBLECHART_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("BUBBLECHART_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Bubblechart Configuration
#
# Environment variables override these settings:
# - BUBBLECHART_TEMPORAL_CSV
# - BUBBLECHART_DELTA_CSV
# - BUBBLECHART_HOST
# - PORT
# - BUBBLECHART_LOCALE
# - BUBBLECHART_LOG_LEVEL
# - BUBBLECHART_LOG_FORMAT

[data]
# One row per (country, year)
temporal_csv = "bubblechart_slider.csv"

# One row per country with the decade change
delta_csv = "bubblechart_change.csv"

[server]
host = "0.0.0.0"
port = 10000

[figure]
# Text language: en or ca
locale = "en"

# Comparison window of the delta chart
delta_start_year = 2012
delta_end_year = 2022

# Animation timings (ms)
temporal_transition_ms = 1000
delta_transition_ms = 500
frame_duration_ms = 500

# Diameter of the largest bubble (px)
max_marker_px = 20.0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
