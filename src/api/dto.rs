//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/v1/figure`
#[derive(Debug, Default, Deserialize)]
pub struct FigureParams {
    /// `temporal` or `delta`; defaults to `temporal`
    #[serde(default)]
    pub mode: Option<String>,
}

/// One selectable chart mode
#[derive(Debug, Serialize, Deserialize)]
pub struct ModeInfo {
    pub value: String,
    pub label: String,
}

/// Response of `GET /api/v1/modes`
#[derive(Debug, Serialize, Deserialize)]
pub struct ModesResponse {
    pub default: String,
    pub modes: Vec<ModeInfo>,
    /// Caption explaining what bubble size encodes
    pub size_note: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub temporal_records: usize,
    pub delta_records: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
