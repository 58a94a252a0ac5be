//! Conversion between schema frames and typed [`Record`]s.

use common::{CrisisFlag, Record};
use polars::prelude::*;

use crate::error::{ComputeError, Result};
use crate::schema::{self, ColumnDef};

fn invalid(def: &ColumnDef, row: usize, reason: impl ToString) -> ComputeError {
    ComputeError::InvalidValue {
        column: def.header.to_string(),
        row,
        reason: reason.to_string(),
    }
}

/// Reads typed cells from one frame column.
struct CellReader<'a> {
    def: ColumnDef,
    column: &'a Column,
}

impl<'a> CellReader<'a> {
    fn new(df: &'a DataFrame, def: ColumnDef) -> Result<Self> {
        let column = df
            .column(def.header)
            .map_err(|_| ComputeError::MissingColumn(def.header.to_string()))?;
        Ok(Self { def, column })
    }

    fn value(&self, row: usize) -> Result<AnyValue<'a>> {
        match self.column.get(row) {
            Ok(AnyValue::Null) => Err(invalid(&self.def, row, "missing value")),
            Ok(value) => Ok(value),
            Err(e) => Err(invalid(&self.def, row, e)),
        }
    }

    fn text(&self, row: usize) -> Result<String> {
        let text = match self.value(row)? {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => format!("{}", other),
        };
        Ok(text)
    }

    fn float(&self, row: usize) -> Result<f64> {
        self.value(row)?
            .try_extract::<f64>()
            .map_err(|e| invalid(&self.def, row, e))
    }

    fn integer(&self, row: usize) -> Result<i64> {
        self.value(row)?
            .try_extract::<i64>()
            .map_err(|e| invalid(&self.def, row, e))
    }
}

/// Converts a schema frame into records, row by row.
pub fn frame_to_records(df: &DataFrame) -> Result<Vec<Record>> {
    let month = CellReader::new(df, schema::MONTH)?;
    let positive_sentiment = CellReader::new(df, schema::POSITIVE_SENTIMENT)?;
    let negative_sentiment = CellReader::new(df, schema::NEGATIVE_SENTIMENT)?;
    let mention_volume = CellReader::new(df, schema::MENTION_VOLUME)?;
    let dominant_topic = CellReader::new(df, schema::DOMINANT_TOPIC)?;
    let crisis_detected = CellReader::new(df, schema::CRISIS_DETECTED)?;
    let response_time_hours = CellReader::new(df, schema::RESPONSE_TIME_HOURS)?;
    let primary_channel = CellReader::new(df, schema::PRIMARY_CHANNEL)?;
    let citizen_trust_index = CellReader::new(df, schema::CITIZEN_TRUST_INDEX)?;
    let communication_interventions = CellReader::new(df, schema::COMMUNICATION_INTERVENTIONS)?;
    let positive_mentions = CellReader::new(df, schema::POSITIVE_MENTIONS)?;
    let negative_mentions = CellReader::new(df, schema::NEGATIVE_MENTIONS)?;

    let mut records = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let crisis_label = crisis_detected.text(i)?;
        let crisis = crisis_label
            .parse::<CrisisFlag>()
            .map_err(|e| invalid(&schema::CRISIS_DETECTED, i, e))?;

        records.push(Record {
            month: month.text(i)?,
            positive_sentiment: positive_sentiment.float(i)?,
            negative_sentiment: negative_sentiment.float(i)?,
            mention_volume: mention_volume.integer(i)?,
            dominant_topic: dominant_topic.text(i)?,
            crisis_detected: crisis,
            response_time_hours: response_time_hours.float(i)?,
            primary_channel: primary_channel.text(i)?,
            citizen_trust_index: citizen_trust_index.float(i)?,
            communication_interventions: communication_interventions.integer(i)?,
            positive_mentions: positive_mentions.integer(i)?,
            negative_mentions: negative_mentions.integer(i)?,
        });
    }

    Ok(records)
}

/// Builds a schema frame from records.
pub fn records_to_frame(records: &[Record]) -> Result<DataFrame> {
    fn texts(records: &[Record], f: impl Fn(&Record) -> &str) -> Vec<String> {
        records.iter().map(|r| f(r).to_string()).collect()
    }
    fn floats(records: &[Record], f: impl Fn(&Record) -> f64) -> Vec<f64> {
        records.iter().map(f).collect()
    }
    fn integers(records: &[Record], f: impl Fn(&Record) -> i64) -> Vec<i64> {
        records.iter().map(f).collect()
    }

    let df = DataFrame::new(vec![
        Series::new(schema::MONTH.header.into(), texts(records, |r| &r.month)).into(),
        Series::new(
            schema::POSITIVE_SENTIMENT.header.into(),
            floats(records, |r| r.positive_sentiment),
        )
        .into(),
        Series::new(
            schema::NEGATIVE_SENTIMENT.header.into(),
            floats(records, |r| r.negative_sentiment),
        )
        .into(),
        Series::new(
            schema::MENTION_VOLUME.header.into(),
            integers(records, |r| r.mention_volume),
        )
        .into(),
        Series::new(
            schema::DOMINANT_TOPIC.header.into(),
            texts(records, |r| &r.dominant_topic),
        )
        .into(),
        Series::new(
            schema::CRISIS_DETECTED.header.into(),
            texts(records, |r| r.crisis_detected.label()),
        )
        .into(),
        Series::new(
            schema::RESPONSE_TIME_HOURS.header.into(),
            floats(records, |r| r.response_time_hours),
        )
        .into(),
        Series::new(
            schema::PRIMARY_CHANNEL.header.into(),
            texts(records, |r| &r.primary_channel),
        )
        .into(),
        Series::new(
            schema::CITIZEN_TRUST_INDEX.header.into(),
            floats(records, |r| r.citizen_trust_index),
        )
        .into(),
        Series::new(
            schema::COMMUNICATION_INTERVENTIONS.header.into(),
            integers(records, |r| r.communication_interventions),
        )
        .into(),
        Series::new(
            schema::POSITIVE_MENTIONS.header.into(),
            integers(records, |r| r.positive_mentions),
        )
        .into(),
        Series::new(
            schema::NEGATIVE_MENTIONS.header.into(),
            integers(records, |r| r.negative_mentions),
        )
        .into(),
    ])?;

    // Keep column order and dtypes identical to the schema definition.
    schema::conform(&df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_record;

    #[test]
    fn test_records_survive_frame_conversion() {
        let records = vec![sample_record("2023-10", 42.0), sample_record("2023-11", 47.25)];
        let df = records_to_frame(&records).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(frame_to_records(&df).unwrap(), records);
    }

    #[test]
    fn test_empty_frame_converts_to_no_records() {
        let df = schema::empty_frame().unwrap();
        assert!(frame_to_records(&df).unwrap().is_empty());
    }

    #[test]
    fn test_null_cell_is_reported_with_position() {
        let records = vec![sample_record("2023-10", 42.0)];
        let mut df = records_to_frame(&records).unwrap();
        let nulls = Series::full_null(
            schema::CITIZEN_TRUST_INDEX.header.into(),
            1,
            &DataType::Float64,
        );
        df.with_column(nulls).unwrap();

        match frame_to_records(&df) {
            Err(ComputeError::InvalidValue { column, row, .. }) => {
                assert_eq!(column, "indice_confianza_ciudadana");
                assert_eq!(row, 0);
            }
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_crisis_label_is_rejected() {
        let records = vec![sample_record("2023-10", 42.0)];
        let mut df = records_to_frame(&records).unwrap();
        let labels = Series::new(schema::CRISIS_DETECTED.header.into(), vec!["Tal vez"]);
        df.with_column(labels).unwrap();

        assert!(matches!(
            frame_to_records(&df),
            Err(ComputeError::InvalidValue { .. })
        ));
    }
}
