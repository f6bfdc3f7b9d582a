//! Figure description
//!
//! Serializable chart description in the Plotly figure JSON shape
//! (`data`, `layout`, `frames`), so any Plotly front end can render it
//! with `Plotly.newPlot(el, figure)`.

use serde::Serialize;
use serde_json::Value;

/// Complete chart: base traces, layout and animation frames
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    /// Every trace of the figure: base traces first, then frame traces
    pub fn all_traces(&self) -> impl Iterator<Item = &Trace> {
        self.data
            .iter()
            .chain(self.frames.iter().flat_map(|f| f.data.iter()))
    }
}

/// One animation step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

/// Scatter trace for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub legendgroup: String,
    pub showlegend: bool,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Object constancy keys for animation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    pub hovertext: Vec<String>,
    pub customdata: Vec<Value>,
    pub hovertemplate: String,
    pub marker: Marker,
}

impl Trace {
    /// Empty marker scatter for a named category
    pub fn scatter(name: impl Into<String>, marker: Marker, hovertemplate: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: "scatter",
            mode: "markers",
            legendgroup: name.clone(),
            name,
            showlegend: true,
            x: Vec::new(),
            y: Vec::new(),
            ids: None,
            hovertext: Vec::new(),
            customdata: Vec::new(),
            hovertemplate: hovertemplate.into(),
            marker,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
    pub size: Vec<f64>,
    pub sizemode: &'static str,
    pub sizeref: f64,
    pub symbol: &'static str,
}

impl Marker {
    /// Area-sized circle marker
    pub fn bubble(color: impl Into<String>, sizeref: f64) -> Self {
        Self {
            color: color.into(),
            size: Vec::new(),
            sizemode: "area",
            sizeref,
            symbol: "circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    pub showgrid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
    pub itemsizing: &'static str,
    pub tracegroupgap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub duration: u64,
}

/// Straight line in mixed data/domain coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub line: Line,
}

impl Shape {
    /// Full-height vertical line at `x`
    pub fn vline(x: f64, line: Line) -> Self {
        Self {
            kind: "line",
            xref: "x",
            yref: "y domain",
            x0: x,
            x1: x,
            y0: 0.0,
            y1: 1.0,
            line,
        }
    }

    /// Full-width horizontal line at `y`
    pub fn hline(y: f64, line: Line) -> Self {
        Self {
            kind: "line",
            xref: "x domain",
            yref: "y",
            x0: 0.0,
            x1: 1.0,
            y0: y,
            y1: y,
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub dash: &'static str,
}

/// Arrow callout pinned to a data point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub xref: &'static str,
    pub yref: &'static str,
    pub text: String,
    pub showarrow: bool,
    pub arrowhead: u8,
    /// Arrow tail offset in pixels
    pub ax: f64,
    pub ay: f64,
    pub bgcolor: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    pub active: usize,
    pub currentvalue: CurrentValue,
    pub len: f64,
    pub pad: Pad,
    pub x: f64,
    pub xanchor: &'static str,
    pub y: f64,
    pub yanchor: &'static str,
    pub steps: Vec<SliderStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentValue {
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderStep {
    pub args: Value,
    pub label: String,
    pub method: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub buttons: Vec<MenuButton>,
    pub direction: &'static str,
    pub pad: Pad,
    pub showactive: bool,
    pub x: f64,
    pub xanchor: &'static str,
    pub y: f64,
    pub yanchor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuButton {
    pub args: Value,
    pub label: String,
    pub method: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Pad {
    pub t: f64,
    pub r: f64,
    pub b: f64,
    pub l: f64,
}
