//! Rendering of chart specifications as Plotly.js figures (`{"data", "layout"}`).

use anyhow::Result;
use common::{ChartKind, ChartSpec, Datum, Series, Theme};
use plotly::common::{Font, Line, Marker, Mode, SizeMode, Title};
use plotly::layout::{Axis, BarMode, Legend, Margin, TicksDirection};
use plotly::{Bar, Layout, Plot, Scatter};
use serde_json::Value;

/// Builds the Plotly.js figure for a chart specification.
pub fn plotly_figure(spec: &ChartSpec) -> Result<Value> {
    let mut plot = Plot::new();
    for series in &spec.series {
        match spec.kind {
            ChartKind::Line => plot.add_trace(line_trace(spec, series)),
            ChartKind::GroupedBar => plot.add_trace(bar_trace(series)),
            ChartKind::Scatter => plot.add_trace(scatter_trace(series)),
        }
    }
    plot.set_layout(layout(spec));

    let mut figure: Value = serde_json::from_str(&plot.to_json())?;

    // sizeref is integral in the typed marker
    if let Some(encoding) = &spec.size {
        if let Some(traces) = figure["data"].as_array_mut() {
            for trace in traces {
                trace["marker"]["sizeref"] = Value::from(encoding.reference);
            }
        }
    }
    Ok(figure)
}

fn line_trace(spec: &ChartSpec, series: &Series) -> Box<Scatter<Datum, f64>> {
    let mode = if spec.markers {
        Mode::LinesMarkers
    } else {
        Mode::Lines
    };
    Scatter::new(series.x.clone(), series.y.clone())
        .mode(mode)
        .name(series.name.as_str())
        .line(Line::new().color(series.color.clone()))
        .marker(Marker::new().color(series.color.clone()))
        .show_legend(spec.series.len() > 1)
}

fn bar_trace(series: &Series) -> Box<Bar<Datum, f64>> {
    Bar::new(series.x.clone(), series.y.clone())
        .name(series.name.as_str())
        .marker(Marker::new().color(series.color.clone()))
        .offset_group(series.name.as_str())
}

fn scatter_trace(series: &Series) -> Box<Scatter<Datum, f64>> {
    let mut marker = Marker::new().color(series.color.clone());
    if let Some(sizes) = &series.size {
        let sizes: Vec<usize> = sizes.iter().map(|s| s.max(0.0).round() as usize).collect();
        marker = marker.size_array(sizes).size_mode(SizeMode::Area);
    }
    Scatter::new(series.x.clone(), series.y.clone())
        .mode(Mode::Markers)
        .name(series.name.as_str())
        .marker(marker)
}

fn axis(label: &str, theme: Theme) -> Axis {
    let axis = Axis::new().title(Title::with_text(label));
    match theme {
        Theme::Ggplot2 => axis
            .show_grid(true)
            .grid_color("white")
            .line_color("white")
            .ticks(TicksDirection::Outside)
            .tick_color("rgb(51,51,51)"),
    }
}

fn layout(spec: &ChartSpec) -> Layout {
    let mut layout = Layout::new()
        .title(Title::with_text(spec.title.as_str()).x(spec.title_x))
        .x_axis(axis(&spec.x.label, spec.theme))
        .y_axis(axis(&spec.y.label, spec.theme))
        .margin(Margin::new().top(60).right(10).left(60).bottom(50));

    if let Some(color) = &spec.color {
        layout = layout.legend(Legend::new().title(Title::with_text(color.label.as_str())));
    }
    if spec.kind == ChartKind::GroupedBar {
        layout = layout.bar_mode(BarMode::Group);
    }

    match spec.theme {
        // Grey panel, white grid, dark ticks
        Theme::Ggplot2 => layout
            .paper_background_color("white")
            .plot_background_color("rgb(237,237,237)")
            .font(Font::new().color("rgb(51,51,51)")),
    }
}
