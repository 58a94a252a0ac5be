//! Library-neutral chart specifications.
//!
//! A [`ChartSpec`] describes what to draw (kind, bindings, series, colors) and
//! leaves the drawing itself to whichever backend consumes it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of mark a chart uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Connected line, one point per record
    Line,
    /// Side-by-side bars, one bar per record per series
    GroupedBar,
    /// Free-standing points
    Scatter,
}

/// Whether a color scale encodes order or categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Sequential,
    Qualitative,
}

/// Named list of colors used to paint series in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorScale {
    /// Scale kind
    pub kind: ScaleKind,
    /// Scale name, e.g. "Plasma"
    pub name: String,
    /// CSS colors in scale order
    pub colors: Vec<String>,
}

impl ColorScale {
    /// Color for the n-th series. Cycles when there are more series than colors.
    pub fn color_at(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return "#444444";
        }
        &self.colors[index % self.colors.len()]
    }
}

/// Visual theme applied to the chart frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Theme {
    #[serde(rename = "ggplot2")]
    Ggplot2,
}

/// Binding of a visual channel to a record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AxisBinding {
    /// Record field name
    pub field: String,
    /// Label displayed for the channel
    pub label: String,
}

impl AxisBinding {
    pub fn new(field: &str, label: &str) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
        }
    }
}

/// Point size channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SizeEncoding {
    /// Field the size is read from
    pub binding: AxisBinding,
    /// Largest rendered marker diameter, in pixels
    pub max_diameter: f64,
    /// Area scaling reference so that the largest value maps to `max_diameter`
    pub reference: f64,
}

/// A single x value: categorical label or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Datum {
    Number(f64),
    Text(String),
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Datum::Number(value)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::Text(value.to_string())
    }
}

/// One drawn series. `x`, `y` and `size` (when present) have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Series {
    /// Legend name
    pub name: String,
    /// CSS color
    pub color: String,
    /// X values
    pub x: Vec<Datum>,
    /// Y values
    pub y: Vec<f64>,
    /// Marker sizes, when the chart has a size channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
}

impl Series {
    /// Number of marks this series draws
    pub fn len(&self) -> usize {
        self.y.len()
    }
}

/// Declarative description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSpec {
    /// Stable identifier, used in URLs and as the DOM element id
    pub id: String,
    /// Mark kind
    pub kind: ChartKind,
    /// Chart title
    pub title: String,
    /// Horizontal title position, 0 = left, 0.5 = centered, 1 = right
    pub title_x: f64,
    /// X channel
    pub x: AxisBinding,
    /// Y channel (for multi-field charts, the shared value axis)
    pub y: AxisBinding,
    /// Field whose values split the data into series, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<AxisBinding>,
    /// Size channel, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeEncoding>,
    /// Whether point markers are drawn
    pub markers: bool,
    /// Color scale the series colors were taken from
    pub color_scale: ColorScale,
    /// Visual theme
    pub theme: Theme,
    /// Drawn series
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Total number of marks over all series.
    pub fn mark_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Series by legend name.
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }
}
