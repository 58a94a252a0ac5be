use polars::prelude::*;
use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::schema;

/// Reads the citizen-trust dataset from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the file into a frame conformed to the schema.
    ///
    /// A missing file yields an empty frame with every schema column. Any other
    /// failure (unreadable file, bad CSV, missing or uncastable column) is returned.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<DataFrame> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Dataset file {} not found, continuing with an empty dataset",
                    self.path.display()
                );
                return schema::empty_frame();
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Reading CSV dataset");
        let options = CsvReadOptions::default()
            .with_has_header(true)
            .with_schema_overwrite(Some(Arc::new(schema::parse_schema())));
        let parsed = CsvReader::new(file).with_options(options).finish()?;
        debug!("Parsed {} rows and {} columns", parsed.height(), parsed.width());

        let conformed = schema::conform(&parsed)?;
        info!("Loaded {} rows from {}", conformed.height(), self.path.display());
        Ok(conformed)
    }
}
