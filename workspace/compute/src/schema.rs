//! Column schema of the citizen-trust dataset.
//!
//! Every frame in this crate (parsed file, empty fallback, forecast rows) is
//! built or conformed through [`COLUMNS`], so all of them share one shape.

use polars::prelude::*;
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};

/// Storage type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Float,
    Integer,
}

impl ColumnType {
    /// Polars dtype the column is stored as
    pub fn data_type(&self) -> DataType {
        match self {
            ColumnType::Text => DataType::String,
            ColumnType::Float => DataType::Float64,
            ColumnType::Integer => DataType::Int64,
        }
    }

    /// Dtype the CSV reader parses the column as.
    ///
    /// Integer columns are read as floats so that [`conform`] can report a
    /// fractional count by row instead of truncating it.
    pub fn parse_type(&self) -> DataType {
        match self {
            ColumnType::Text => DataType::String,
            ColumnType::Float | ColumnType::Integer => DataType::Float64,
        }
    }
}

/// One column: record field name, header in the CSV file, storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: &'static str,
    pub header: &'static str,
    pub kind: ColumnType,
}

const fn column(field: &'static str, header: &'static str, kind: ColumnType) -> ColumnDef {
    ColumnDef {
        field,
        header,
        kind,
    }
}

pub const MONTH: ColumnDef = column("month", "mes", ColumnType::Text);
pub const POSITIVE_SENTIMENT: ColumnDef =
    column("positive_sentiment", "sentimiento_positivo", ColumnType::Float);
pub const NEGATIVE_SENTIMENT: ColumnDef =
    column("negative_sentiment", "sentimiento_negativo", ColumnType::Float);
pub const MENTION_VOLUME: ColumnDef =
    column("mention_volume", "volumen_menciones", ColumnType::Integer);
pub const DOMINANT_TOPIC: ColumnDef =
    column("dominant_topic", "topico_predominante", ColumnType::Text);
pub const CRISIS_DETECTED: ColumnDef =
    column("crisis_detected", "crisis_detectada", ColumnType::Text);
pub const RESPONSE_TIME_HOURS: ColumnDef =
    column("response_time_hours", "tiempo_respuesta_horas", ColumnType::Float);
pub const PRIMARY_CHANNEL: ColumnDef =
    column("primary_channel", "medio_principal", ColumnType::Text);
pub const CITIZEN_TRUST_INDEX: ColumnDef = column(
    "citizen_trust_index",
    "indice_confianza_ciudadana",
    ColumnType::Float,
);
pub const COMMUNICATION_INTERVENTIONS: ColumnDef = column(
    "communication_interventions",
    "intervenciones_comunicacion",
    ColumnType::Integer,
);
pub const POSITIVE_MENTIONS: ColumnDef =
    column("positive_mentions", "menciones_positivas", ColumnType::Integer);
pub const NEGATIVE_MENTIONS: ColumnDef =
    column("negative_mentions", "menciones_negativas", ColumnType::Integer);

/// All columns, in file order.
pub const COLUMNS: [ColumnDef; 12] = [
    MONTH,
    POSITIVE_SENTIMENT,
    NEGATIVE_SENTIMENT,
    MENTION_VOLUME,
    DOMINANT_TOPIC,
    CRISIS_DETECTED,
    RESPONSE_TIME_HOURS,
    PRIMARY_CHANNEL,
    CITIZEN_TRUST_INDEX,
    COMMUNICATION_INTERVENTIONS,
    POSITIVE_MENTIONS,
    NEGATIVE_MENTIONS,
];

/// Creates a frame with every schema column and no rows.
pub fn empty_frame() -> Result<DataFrame> {
    let columns: Vec<Column> = COLUMNS
        .iter()
        .map(|c| Series::new_empty(c.header.into(), &c.kind.data_type()).into())
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Dtypes the CSV reader must use for the schema columns, keyed by header.
pub fn parse_schema() -> Schema {
    COLUMNS
        .iter()
        .map(|c| -> (PlSmallStr, DataType) { (c.header.into(), c.kind.parse_type()) })
        .collect()
}

/// Row of the first value in a float column that is not a whole number.
fn first_fractional(column: &Column) -> Result<Option<usize>> {
    let values = column.cast(&DataType::Float64)?;
    let position = values
        .f64()?
        .into_iter()
        .position(|v| v.is_some_and(|v| v.fract() != 0.0));
    Ok(position)
}

/// Selects the schema columns from `df`, in schema order, cast to the schema types.
///
/// Columns not in the schema are dropped. A missing schema column is an error.
#[instrument(skip(df), fields(rows = df.height(), width = df.width()))]
pub fn conform(df: &DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(COLUMNS.len());

    for def in COLUMNS.iter() {
        let source = df
            .column(def.header)
            .map_err(|_| ComputeError::MissingColumn(def.header.to_string()))?;
        let target = def.kind.data_type();
        if source.dtype() == &target {
            columns.push(source.clone());
        } else {
            if def.kind == ColumnType::Integer && source.dtype().is_float() {
                if let Some(row) = first_fractional(source)? {
                    return Err(ComputeError::InvalidValue {
                        column: def.header.to_string(),
                        row,
                        reason: "expected a whole number".to_string(),
                    });
                }
            }
            trace!("Casting column {} from {} to {}", def.header, source.dtype(), target);
            columns.push(source.cast(&target)?);
        }
    }

    let conformed = DataFrame::new(columns)?;
    debug!("Conformed frame to schema with {} rows", conformed.height());
    Ok(conformed)
}
