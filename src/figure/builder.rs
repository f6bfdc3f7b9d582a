//! Figure Builder
//!
//! Entry point that turns a chart mode and the prepared datasets into a
//! figure description. Building is a pure function of its inputs: the same
//! mode, datasets and options always give an identical figure.

use super::delta::delta_figure;
use super::error::{FigureError, FigureResult};
use super::labels::{Labels, Locale};
use super::model::Figure;
use super::temporal::temporal_figure;
use crate::data::Datasets;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which chart to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Freedom vs. happiness, animated year by year
    #[default]
    Temporal,
    /// Change in freedom vs. change in happiness over the decade
    Delta,
}

impl ChartMode {
    pub fn all() -> &'static [ChartMode] {
        &[ChartMode::Temporal, ChartMode::Delta]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartMode::Temporal => "temporal",
            ChartMode::Delta => "delta",
        }
    }

    /// Selector label shown next to the mode
    pub fn label(self, options: &FigureOptions) -> String {
        let labels = Labels::for_locale(options.locale);
        match self {
            ChartMode::Temporal => labels.temporal_mode.to_string(),
            ChartMode::Delta => format!(
                "{} {}–{}",
                labels.delta_mode, options.delta_start_year, options.delta_end_year
            ),
        }
    }
}

impl FromStr for ChartMode {
    type Err = FigureError;

    /// `slider` is accepted as an alias for `temporal`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "temporal" | "slider" => Ok(ChartMode::Temporal),
            "delta" => Ok(ChartMode::Delta),
            _ => Err(FigureError::UnrecognizedMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for ChartMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation settings shared by both charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureOptions {
    pub locale: Locale,
    /// First year of the delta comparison window
    pub delta_start_year: i32,
    /// Last year of the delta comparison window, used in callouts and legend
    pub delta_end_year: i32,
    pub temporal_transition_ms: u64,
    pub delta_transition_ms: u64,
    /// Time each year stays on screen while playing
    pub frame_duration_ms: u64,
    /// Diameter in pixels of the largest bubble
    pub max_marker_px: f64,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            delta_start_year: 2012,
            delta_end_year: 2022,
            temporal_transition_ms: 1000,
            delta_transition_ms: 500,
            frame_duration_ms: 500,
            max_marker_px: 20.0,
        }
    }
}

/// Build the figure for `mode`
pub fn build_figure(
    mode: ChartMode,
    datasets: &Datasets,
    options: &FigureOptions,
) -> FigureResult<Figure> {
    let labels = Labels::for_locale(options.locale);
    let figure = match mode {
        ChartMode::Temporal => temporal_figure(datasets.temporal(), options, labels)?,
        ChartMode::Delta => delta_figure(datasets.delta(), options, labels)?,
    };

    tracing::debug!(
        mode = %mode,
        traces = figure.data.len(),
        frames = figure.frames.len(),
        "Figure built"
    );

    Ok(figure)
}

/// Parse `mode` and build its figure
pub fn build_figure_str(
    mode: &str,
    datasets: &Datasets,
    options: &FigureOptions,
) -> FigureResult<Figure> {
    build_figure(mode.parse()?, datasets, options)
}

/// Plotly `sizeref` for area-sized markers so the largest bubble is
/// `max_px` across.
pub(crate) fn marker_sizeref(sizes: impl Iterator<Item = f64>, max_px: f64) -> f64 {
    let max = sizes.fold(0.0_f64, f64::max);
    if max <= 0.0 || max_px <= 0.0 {
        1.0
    } else {
        2.0 * max / (max_px * max_px)
    }
}

/// Data extent padded by 5% on each side
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> Option<[f64; 2]> {
    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;

    let span = max - min;
    let pad = if span == 0.0 { 1.0 } else { span * 0.05 };
    Some([min - pad, max + pad])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_datasets;

    #[test]
    fn test_mode_parse() {
        assert_eq!("temporal".parse::<ChartMode>().unwrap(), ChartMode::Temporal);
        assert_eq!("slider".parse::<ChartMode>().unwrap(), ChartMode::Temporal);
        assert_eq!(" Delta ".parse::<ChartMode>().unwrap(), ChartMode::Delta);
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let err = "unknown".parse::<ChartMode>().unwrap_err();
        assert_eq!(err, FigureError::UnrecognizedMode("unknown".to_string()));

        let datasets = sample_datasets();
        let result = build_figure_str("unknown", &datasets, &FigureOptions::default());
        assert!(matches!(result, Err(FigureError::UnrecognizedMode(_))));

        assert!(build_figure_str("", &datasets, &FigureOptions::default()).is_err());
    }

    #[test]
    fn test_mode_labels() {
        let options = FigureOptions::default();
        assert_eq!(ChartMode::Temporal.label(&options), "Evolution over time");
        assert_eq!(ChartMode::Delta.label(&options), "Change 2012–2022");

        let catalan = FigureOptions {
            locale: Locale::Ca,
            ..Default::default()
        };
        assert_eq!(ChartMode::Delta.label(&catalan), "Canvi 2012–2022");
    }

    #[test]
    fn test_build_is_deterministic() {
        let datasets = sample_datasets();
        let options = FigureOptions::default();

        for mode in ChartMode::all() {
            let first = build_figure(*mode, &datasets, &options).unwrap();
            let second = build_figure(*mode, &datasets, &options).unwrap();
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_modes_build_different_figures() {
        let datasets = sample_datasets();
        let options = FigureOptions::default();

        let temporal = build_figure(ChartMode::Temporal, &datasets, &options).unwrap();
        let delta = build_figure(ChartMode::Delta, &datasets, &options).unwrap();
        assert_ne!(temporal, delta);
    }

    #[test]
    fn test_sizeref() {
        assert_eq!(marker_sizeref([0.0, 0.5, 1.0].into_iter(), 20.0), 2.0 / 400.0);
        assert_eq!(marker_sizeref([0.0, 0.0].into_iter(), 20.0), 1.0);
        assert_eq!(marker_sizeref(std::iter::empty(), 20.0), 1.0);
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range([0.0, 10.0].into_iter()), Some([-0.5, 10.5]));
        assert_eq!(padded_range([3.0].into_iter()), Some([2.0, 4.0]));
        assert_eq!(padded_range(std::iter::empty()), None);
    }
}
