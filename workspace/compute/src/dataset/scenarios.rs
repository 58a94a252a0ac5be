//! The three future-scenario rows appended to every loaded dataset.

use common::{CrisisFlag, Record};
use polars::prelude::*;
use tracing::{debug, instrument};

use crate::dataset::convert::records_to_frame;
use crate::error::Result;

/// Literal forecast rows: (month, +sentiment, -sentiment, volume, topic, crisis,
/// response hours, channel, trust index, interventions, +mentions, -mentions)
const FORECASTS: [(&str, f64, f64, i64, &str, CrisisFlag, f64, &str, f64, i64, i64, i64); 3] = [
    ("2024-01", 60.0, 40.0, 15000, "confianza en la FCC", CrisisFlag::No, 8.0, "Twitter", 64.85, 2, 9000, 6000),
    ("2024-02", 35.0, 65.0, 17000, "contrataciones públicas", CrisisFlag::Yes, 30.0, "Facebook", 55.18, 0, 5950, 11050),
    ("2024-03", 50.0, 50.0, 12000, "caso mediático", CrisisFlag::No, 12.0, "Foros", 61.28, 1, 6000, 6000),
];

/// The forecast rows, in append order.
pub fn forecast_records() -> Vec<Record> {
    FORECASTS
        .iter()
        .map(
            |&(month, pos, neg, volume, topic, crisis, hours, channel, trust, interventions, pos_m, neg_m)| Record {
                month: month.to_string(),
                positive_sentiment: pos,
                negative_sentiment: neg,
                mention_volume: volume,
                dominant_topic: topic.to_string(),
                crisis_detected: crisis,
                response_time_hours: hours,
                primary_channel: channel.to_string(),
                citizen_trust_index: trust,
                communication_interventions: interventions,
                positive_mentions: pos_m,
                negative_mentions: neg_m,
            },
        )
        .collect()
}

/// The forecast rows as a schema frame.
pub fn forecast_frame() -> Result<DataFrame> {
    records_to_frame(&forecast_records())
}

/// Returns `loaded` followed by the forecast rows, as a new frame.
///
/// `loaded` must already be conformed to the schema.
#[instrument(skip(loaded), fields(loaded_rows = loaded.height()))]
pub fn augment(loaded: &DataFrame) -> Result<DataFrame> {
    let forecasts = forecast_frame()?;
    let augmented = loaded.vstack(&forecasts)?;
    debug!("Augmented dataset has {} rows", augmented.height());
    Ok(augmented)
}
