//! Tracing subscriber setup

use crate::config::LoggingConfig;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("bubblechart={},tower_http=info", config.level)
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. `format = "json"`
/// emits one JSON object per line; anything else is human-readable.
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    init_with_writer(config, std::io::stdout)
}

/// Same as [`init`], writing to `writer` instead of stdout
pub fn init_with_writer<W>(config: &LoggingConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init()
    }
}
