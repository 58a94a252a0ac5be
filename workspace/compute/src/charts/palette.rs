//! Color scales from the Plotly palette collection.

use common::{ColorScale, ScaleKind};

/// Plotly `sequential.Plasma`
const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Plotly `qualitative.Safe`, colorblind-safe
const SAFE: [&str; 11] = [
    "rgb(136, 204, 238)",
    "rgb(204, 102, 119)",
    "rgb(221, 204, 119)",
    "rgb(17, 119, 51)",
    "rgb(51, 34, 136)",
    "rgb(170, 68, 153)",
    "rgb(68, 170, 153)",
    "rgb(153, 153, 51)",
    "rgb(136, 34, 85)",
    "rgb(102, 17, 0)",
    "rgb(136, 136, 136)",
];

fn scale(kind: ScaleKind, name: &str, colors: &[&str]) -> ColorScale {
    ColorScale {
        kind,
        name: name.to_string(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn plasma() -> ColorScale {
    scale(ScaleKind::Sequential, "Plasma", &PLASMA)
}

pub fn safe() -> ColorScale {
    scale(ScaleKind::Qualitative, "Safe", &SAFE)
}
