use anyhow::Result;
use common::{ChartSpec, Record};
use serde::Serialize;
use std::path::Path;

use trustboard::config::{DEFAULT_BIND_ADDRESS, Settings};
use trustboard::dashboard::build_dashboard;

#[derive(Serialize)]
struct Inspection<'a> {
    records: &'a [Record],
    charts: &'a [ChartSpec],
}

/// Builds the dashboard and prints its dataset and chart specifications.
pub fn inspect(dataset_path: &Path) -> Result<()> {
    let settings = Settings::new(dataset_path, DEFAULT_BIND_ADDRESS);
    let dashboard = build_dashboard(&settings)?;

    let inspection = Inspection {
        records: &dashboard.records,
        charts: &dashboard.charts,
    };
    println!("{}", serde_json::to_string_pretty(&inspection)?);
    Ok(())
}
