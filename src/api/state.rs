//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::data::Datasets;
use crate::figure::FigureOptions;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Prepared datasets, read-only after startup
    pub datasets: Arc<Datasets>,
    /// Presentation settings for every figure
    pub options: Arc<FigureOptions>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(datasets: Datasets, options: FigureOptions) -> Self {
        Self {
            datasets: Arc::new(datasets),
            options: Arc::new(options),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
