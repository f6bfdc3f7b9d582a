//! Dataset Routes
//!
//! - GET /api/v1/datasets - Summary of the loaded datasets

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::data::DatasetSummary;

/// GET /api/v1/datasets
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.datasets.summary())
}
