//! Figure Builder
//!
//! Builds Plotly-compatible bubble charts from the prepared datasets.
//!
//! - [`ChartMode::Temporal`]: freedom vs. happiness by region, animated by
//!   year with countries as animation groups
//! - [`ChartMode::Delta`]: change in freedom vs. change in happiness by
//!   quartile, with zero lines and callouts on the freedom extremes

pub mod builder;
mod delta;
pub mod error;
pub mod labels;
pub mod model;
pub mod palette;
mod temporal;

pub use builder::{build_figure, build_figure_str, ChartMode, FigureOptions};
pub use error::{FigureError, FigureResult};
pub use labels::{Labels, Locale};
pub use model::{Annotation, Figure, Frame, Layout, Shape, Trace};
