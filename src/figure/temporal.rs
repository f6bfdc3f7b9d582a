//! Temporal chart: freedom vs. happiness, one animation frame per year

use super::builder::{marker_sizeref, padded_range, FigureOptions};
use super::error::{FigureError, FigureResult};
use super::labels::Labels;
use super::model::{
    Axis, CurrentValue, Figure, Frame, Layout, Legend, MenuButton, Pad, Slider, SliderStep,
    Title, Trace, Transition, UpdateMenu, Marker,
};
use super::palette::{region_color, BACKGROUND};
use crate::data::{CountryYearRecord, Region};
use serde_json::json;
use std::collections::BTreeSet;

pub(crate) fn temporal_figure(
    records: &[CountryYearRecord],
    options: &FigureOptions,
    labels: &Labels,
) -> FigureResult<Figure> {
    if records.is_empty() {
        return Err(FigureError::EmptyDataset("temporal"));
    }

    let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();
    let present: BTreeSet<Region> = records.iter().map(|r| r.region).collect();
    let sizeref = marker_sizeref(records.iter().map(|r| r.size), options.max_marker_px);
    let template = hover_template(labels);

    // Every frame carries the same region traces in the same order, empty or
    // not, so Plotly matches traces by index across frames.
    let frames: Vec<Frame> = years
        .iter()
        .map(|&year| Frame {
            name: year.to_string(),
            data: present
                .iter()
                .map(|&region| {
                    region_trace(
                        region,
                        records.iter().filter(|r| r.year == year && r.region == region),
                        &template,
                        sizeref,
                    )
                })
                .collect(),
        })
        .collect();

    let data = frames.first().map(|f| f.data.clone()).unwrap_or_default();
    let frame_names: Vec<String> = frames.iter().map(|f| f.name.clone()).collect();

    Ok(Figure {
        data,
        layout: Layout {
            title: Title::new(labels.temporal_title),
            xaxis: Axis {
                title: Title::new(labels.freedom_axis),
                showgrid: false,
                range: padded_range(records.iter().map(|r| r.freedom)),
            },
            yaxis: Axis {
                title: Title::new(labels.happiness_axis),
                showgrid: false,
                range: padded_range(records.iter().map(|r| r.happiness)),
            },
            legend: Legend {
                title: Title::default(),
                itemsizing: "constant",
                tracegroupgap: 0,
            },
            paper_bgcolor: BACKGROUND.to_string(),
            plot_bgcolor: BACKGROUND.to_string(),
            shapes: Vec::new(),
            annotations: Vec::new(),
            sliders: vec![year_slider(&frame_names, labels)],
            updatemenus: vec![play_controls(options, labels)],
            transition: Transition {
                duration: options.temporal_transition_ms,
            },
        },
        frames,
    })
}

fn hover_template(labels: &Labels) -> String {
    format!(
        "<b>%{{hovertext}}</b><br>%{{customdata[0]}}<br><br>\
         {}: %{{customdata[1]}}<br>\
         {}: %{{customdata[2]:.2f}}<br>\
         {}: %{{customdata[3]:.2f}}<br><extra></extra>",
        labels.year, labels.freedom_index, labels.happiness_index
    )
}

fn region_trace<'a>(
    region: Region,
    records: impl Iterator<Item = &'a CountryYearRecord>,
    template: &str,
    sizeref: f64,
) -> Trace {
    let mut trace = Trace::scatter(
        region.as_str(),
        Marker::bubble(region_color(region), sizeref),
        template,
    );
    let mut ids = Vec::new();

    for record in records {
        trace.x.push(record.freedom);
        trace.y.push(record.happiness);
        trace.marker.size.push(record.size);
        trace.hovertext.push(record.country.clone());
        trace.customdata.push(json!([
            record.region.as_str(),
            record.year,
            record.freedom,
            record.happiness
        ]));
        ids.push(record.country.clone());
    }

    trace.ids = Some(ids);
    trace
}

fn animate_args(frames: serde_json::Value, frame_ms: u64, transition_ms: u64) -> serde_json::Value {
    json!([
        frames,
        {
            "frame": { "duration": frame_ms, "redraw": false },
            "mode": "immediate",
            "fromcurrent": true,
            "transition": { "duration": transition_ms, "easing": "linear" }
        }
    ])
}

fn year_slider(frame_names: &[String], labels: &Labels) -> Slider {
    Slider {
        active: 0,
        currentvalue: CurrentValue {
            prefix: format!("{}=", labels.year),
        },
        len: 0.9,
        pad: Pad {
            t: 60.0,
            b: 10.0,
            ..Default::default()
        },
        x: 0.1,
        xanchor: "left",
        y: 0.0,
        yanchor: "top",
        steps: frame_names
            .iter()
            .map(|name| SliderStep {
                args: animate_args(json!([name]), 0, 0),
                label: name.clone(),
                method: "animate",
            })
            .collect(),
    }
}

fn play_controls(options: &FigureOptions, labels: &Labels) -> UpdateMenu {
    UpdateMenu {
        kind: "buttons",
        buttons: vec![
            MenuButton {
                args: animate_args(
                    serde_json::Value::Null,
                    options.frame_duration_ms,
                    options.frame_duration_ms,
                ),
                label: labels.play.to_string(),
                method: "animate",
            },
            MenuButton {
                args: animate_args(json!([null]), 0, 0),
                label: labels.pause.to_string(),
                method: "animate",
            },
        ],
        direction: "left",
        pad: Pad {
            t: 70.0,
            r: 10.0,
            ..Default::default()
        },
        showactive: false,
        x: 0.1,
        xanchor: "right",
        y: 0.0,
        yanchor: "top",
    }
}
