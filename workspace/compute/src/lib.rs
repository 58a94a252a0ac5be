//! Data preparation for the citizen-trust dashboard: the record schema, the
//! dataset loader and forecast augmenter, and the chart builders.

pub mod charts;
pub mod dataset;
pub mod error;
pub mod schema;

#[cfg(test)]
mod testing;

use common::{ChartSpec, Record};
use std::path::Path;

pub use charts::{ChartBuilder, build_charts, default_builders};
pub use dataset::{DEFAULT_DATASET_FILE, working_dataset};

/// Loads the Working Dataset and builds the default charts over it.
///
/// This is the pre-configured pipeline the dashboard runs at startup.
pub fn default_pipeline(path: &Path) -> error::Result<(Vec<Record>, Vec<ChartSpec>)> {
    let records = working_dataset(path)?;
    let charts = build_charts(&default_builders(), &records);
    Ok((records, charts))
}
