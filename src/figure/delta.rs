//! Delta chart: decade change in freedom vs. change in happiness
//!
//! Coloured by quartile, with dashed zero lines and two callouts marking
//! the countries with the lowest and highest absolute freedom index.

use super::builder::{marker_sizeref, FigureOptions};
use super::error::{FigureError, FigureResult};
use super::labels::Labels;
use super::model::{
    Annotation, Axis, Figure, Font, Layout, Legend, Line, Marker, Shape, Title, Trace, Transition,
};
use super::palette::{quartile_color, ANNOTATION_TEXT, BACKGROUND, REFERENCE_LINE};
use crate::data::{CountryDeltaRecord, Quartile};
use serde_json::json;

pub(crate) fn delta_figure(
    records: &[CountryDeltaRecord],
    options: &FigureOptions,
    labels: &Labels,
) -> FigureResult<Figure> {
    let (least, most) = freedom_extrema(records).ok_or(FigureError::EmptyDataset("delta"))?;

    let sizeref = marker_sizeref(records.iter().map(|r| r.size), options.max_marker_px);
    let template = hover_template(labels);

    let data: Vec<Trace> = Quartile::all()
        .iter()
        .filter(|q| records.iter().any(|r| r.quartile == **q))
        .map(|&quartile| quartile_trace(quartile, records, labels, &template, sizeref))
        .collect();

    let zero_line = Line {
        color: REFERENCE_LINE.to_string(),
        dash: "dash",
    };

    let annotations = vec![
        callout(
            least,
            format!("{} ({} ({}))", least.country, labels.less_freedom, options.delta_end_year),
            quartile_color(Quartile::Q4),
            (0.0, -50.0),
        ),
        callout(
            most,
            format!("{} ({} ({}))", most.country, labels.more_freedom, options.delta_end_year),
            quartile_color(Quartile::Q1),
            (-40.0, 100.0),
        ),
    ];

    Ok(Figure {
        data,
        layout: Layout {
            title: Title::new(labels.delta_title),
            xaxis: Axis {
                title: Title::new(labels.freedom_axis),
                showgrid: false,
                range: None,
            },
            yaxis: Axis {
                title: Title::new(labels.happiness_axis),
                showgrid: false,
                range: None,
            },
            legend: Legend {
                title: Title::new(format!("{} ({})", labels.delta_legend, options.delta_end_year)),
                itemsizing: "constant",
                tracegroupgap: 0,
            },
            paper_bgcolor: BACKGROUND.to_string(),
            plot_bgcolor: BACKGROUND.to_string(),
            shapes: vec![Shape::vline(0.0, zero_line.clone()), Shape::hline(0.0, zero_line)],
            annotations,
            sliders: Vec::new(),
            updatemenus: Vec::new(),
            transition: Transition {
                duration: options.delta_transition_ms,
            },
        },
        frames: Vec::new(),
    })
}

/// Records with the lowest and highest absolute freedom index.
///
/// Ties go to the record that comes first in file order.
pub(crate) fn freedom_extrema(
    records: &[CountryDeltaRecord],
) -> Option<(&CountryDeltaRecord, &CountryDeltaRecord)> {
    let mut iter = records.iter();
    let first = iter.next()?;

    Some(iter.fold((first, first), |(min, max), record| {
        (
            if record.freedom < min.freedom { record } else { min },
            if record.freedom > max.freedom { record } else { max },
        )
    }))
}

fn hover_template(labels: &Labels) -> String {
    format!(
        "<b>%{{hovertext}}</b><br>%{{customdata[0]}}<br><br>\
         {} %{{customdata[1]}}<br>\
         {}: %{{customdata[2]:.2f}}<br>\
         {}: %{{customdata[3]:.2f}}<br><extra></extra>",
        labels.quartile, labels.freedom_change, labels.happiness_change
    )
}

fn quartile_trace(
    quartile: Quartile,
    records: &[CountryDeltaRecord],
    labels: &Labels,
    template: &str,
    sizeref: f64,
) -> Trace {
    let name = labels.quartile_name(quartile);
    let mut trace = Trace::scatter(
        name.clone(),
        Marker::bubble(quartile_color(quartile), sizeref),
        template,
    );

    for record in records.iter().filter(|r| r.quartile == quartile) {
        trace.x.push(record.delta_freedom);
        trace.y.push(record.delta_happiness);
        trace.marker.size.push(record.size);
        trace.hovertext.push(record.country.clone());
        trace.customdata.push(json!([
            record.region.as_str(),
            name,
            record.delta_freedom,
            record.delta_happiness
        ]));
    }

    trace
}

fn callout(record: &CountryDeltaRecord, text: String, color: &str, offset: (f64, f64)) -> Annotation {
    Annotation {
        x: record.delta_freedom,
        y: record.delta_happiness,
        xref: "x",
        yref: "y",
        text,
        showarrow: true,
        arrowhead: 2,
        ax: offset.0,
        ay: offset.1,
        bgcolor: color.to_string(),
        font: Font {
            color: ANNOTATION_TEXT.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_datasets;
    use crate::data::{Datasets, Region};
    use crate::figure::builder::{build_figure, ChartMode};
    use crate::figure::labels::Locale;

    fn figure() -> Figure {
        build_figure(ChartMode::Delta, &sample_datasets(), &FigureOptions::default()).unwrap()
    }

    #[test]
    fn test_two_annotations_at_extrema() {
        let figure = figure();
        let annotations = &figure.layout.annotations;

        assert_eq!(annotations.len(), 2);

        // Afghanistan has the lowest freedom index
        assert_eq!((annotations[0].x, annotations[0].y), (-1.8, -2.5));
        assert!(annotations[0].text.contains("Afghanistan"));
        assert!(annotations[0].text.contains("less freedom"));
        assert_eq!(annotations[0].bgcolor, "#D7191C");

        // Ireland ties Iceland on the highest and comes first
        assert_eq!((annotations[1].x, annotations[1].y), (0.9, 0.2));
        assert!(annotations[1].text.contains("Ireland"));
        assert!(annotations[1].text.contains("more freedom"));
        assert_eq!(annotations[1].bgcolor, "#2C7BB6");
    }

    #[test]
    fn test_annotation_text() {
        let figure = figure();
        assert_eq!(
            figure.layout.annotations[0].text,
            "Afghanistan (less freedom (2022))"
        );
        assert_eq!(figure.layout.annotations[0].font.color, "white");
        assert_eq!((figure.layout.annotations[1].ax, figure.layout.annotations[1].ay), (-40.0, 100.0));
    }

    #[test]
    fn test_extrema_tie_break_first_row() {
        let records = vec![
            CountryDeltaRecord::new("CountryA", Region::Oceania, Quartile::Q2, 0.1, 0.1, 1.0, 5.0),
            CountryDeltaRecord::new("CountryX", Region::Oceania, Quartile::Q4, 0.1, 0.1, 2.0, 1.0),
            CountryDeltaRecord::new("CountryY", Region::Oceania, Quartile::Q4, 0.1, 0.1, 3.0, 1.0),
            CountryDeltaRecord::new("CountryZ", Region::Oceania, Quartile::Q1, 0.1, 0.1, 4.0, 5.0),
        ];
        let (min, max) = freedom_extrema(&records).unwrap();
        assert_eq!(min.country, "CountryX");
        assert_eq!(max.country, "CountryA");

        assert!(freedom_extrema(&[]).is_none());
    }

    #[test]
    fn test_country_x_callout() {
        let temporal = sample_datasets().temporal().to_vec();
        let delta = vec![
            CountryDeltaRecord::new("CountryX", Region::EastAsia, Quartile::Q4, -0.5, 0.3, 9.0, 1.5),
            CountryDeltaRecord::new("CountryY", Region::EastAsia, Quartile::Q1, 0.7, 0.1, 10.0, 8.5),
        ];
        let datasets = Datasets::prepare(temporal, delta).unwrap();

        let figure = build_figure(ChartMode::Delta, &datasets, &FigureOptions::default()).unwrap();
        let annotations = &figure.layout.annotations;
        assert!(annotations[0].text.contains("CountryX"));
        assert!(annotations[0].text.contains("less freedom"));
        assert!(annotations[1].text.contains("CountryY"));
        assert!(annotations[1].text.contains("more freedom"));
    }

    #[test]
    fn test_traces_by_quartile() {
        let figure = figure();

        let names: Vec<&str> = figure.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Q1: more freedom", "Q2", "Q3", "Q4: less freedom"]);

        let q2 = &figure.data[1];
        assert_eq!(q2.hovertext, vec!["Japan", "Iceland"]);
        assert_eq!(q2.x, vec![0.3, 0.2]);
        assert_eq!(q2.marker.color, "#ABD9E9");
        assert!(q2.ids.is_none());
        assert_eq!(q2.customdata[0], json!(["East Asia", "Q2", 0.3, -0.1]));
    }

    #[test]
    fn test_hover_template() {
        let figure = figure();
        for trace in figure.all_traces() {
            assert!(trace.hovertemplate.contains("%{customdata[2]:.2f}"));
            assert!(trace.hovertemplate.ends_with("<extra></extra>"));
        }
    }

    #[test]
    fn test_reference_lines_and_layout() {
        let figure = figure();

        assert_eq!(figure.layout.shapes.len(), 2);
        assert_eq!(figure.layout.shapes[0].x0, 0.0);
        assert_eq!(figure.layout.shapes[0].line.dash, "dash");
        assert_eq!(figure.layout.shapes[1].y0, 0.0);
        assert_eq!(figure.layout.shapes[1].line.color, "gray");

        assert!(figure.frames.is_empty());
        assert_eq!(figure.layout.transition.duration, 500);
        assert_eq!(
            figure.layout.legend.title.text.as_deref(),
            Some("Women's freedom (2022)")
        );
    }

    #[test]
    fn test_catalan_callouts() {
        let options = FigureOptions {
            locale: Locale::Ca,
            ..Default::default()
        };
        let figure = build_figure(ChartMode::Delta, &sample_datasets(), &options).unwrap();

        assert_eq!(
            figure.layout.annotations[0].text,
            "Afghanistan (menys llibertat (2022))"
        );
        assert_eq!(figure.data[0].name, "Q1: més llibertat");
    }
}
