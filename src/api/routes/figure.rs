//! Figure Routes
//!
//! - GET /api/v1/figure?mode=temporal|delta - Figure description for a mode
//! - GET /api/v1/modes - Selectable modes

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{FigureParams, ModeInfo, ModesResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::figure::{build_figure, ChartMode, Figure, Labels};

/// GET /api/v1/figure
///
/// Build the figure for the requested mode. A missing mode selects the
/// temporal chart; an unknown one is rejected with 400.
pub async fn get_figure(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FigureParams>,
) -> ApiResult<Json<Figure>> {
    let mode = match params.mode.as_deref() {
        Some(mode) => mode.parse::<ChartMode>()?,
        None => ChartMode::default(),
    };

    let figure = build_figure(mode, &state.datasets, &state.options)?;

    tracing::debug!(mode = %mode, "Serving figure");

    Ok(Json(figure))
}

/// GET /api/v1/modes
///
/// List the chart modes a selector can offer.
pub async fn list_modes(State(state): State<Arc<AppState>>) -> Json<ModesResponse> {
    let labels = Labels::for_locale(state.options.locale);

    let modes = ChartMode::all()
        .iter()
        .map(|mode| ModeInfo {
            value: mode.as_str().to_string(),
            label: mode.label(&state.options),
        })
        .collect();

    Json(ModesResponse {
        default: ChartMode::default().as_str().to_string(),
        modes,
        size_note: labels.size_note.to_string(),
    })
}
