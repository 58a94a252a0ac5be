pub mod convert;
pub mod loader;
pub mod scenarios;

use common::Record;
use std::path::Path;
use tracing::{info, instrument};

use crate::error::Result;

pub use convert::{frame_to_records, records_to_frame};
pub use loader::DatasetLoader;
pub use scenarios::{augment, forecast_frame, forecast_records};

/// File name of the dataset, looked up in the working directory by default.
pub const DEFAULT_DATASET_FILE: &str = "fcc_sensing_simulacion-segundo intento.csv";

/// Loads the dataset at `path`, appends the forecast rows and returns the Working Dataset.
#[instrument]
pub fn working_dataset(path: &Path) -> Result<Vec<Record>> {
    let loaded = DatasetLoader::new(path).load()?;
    let loaded_rows = loaded.height();
    let augmented = augment(&loaded)?;
    let records = frame_to_records(&augmented)?;
    info!(
        "Working dataset ready: {} loaded rows + {} forecast rows",
        loaded_rows,
        records.len() - loaded_rows
    );
    Ok(records)
}
