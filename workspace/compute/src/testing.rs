//! Fixtures shared by the unit tests of this crate.

use common::{CrisisFlag, Record};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::schema::COLUMNS;

/// A plausible month of metrics with the given label and trust index.
pub fn sample_record(month: &str, trust: f64) -> Record {
    Record {
        month: month.to_string(),
        positive_sentiment: 55.5,
        negative_sentiment: 44.5,
        mention_volume: 10000,
        dominant_topic: "servicios digitales".to_string(),
        crisis_detected: CrisisFlag::No,
        response_time_hours: 10.25,
        primary_channel: "Twitter".to_string(),
        citizen_trust_index: trust,
        communication_interventions: 1,
        positive_mentions: 5500,
        negative_mentions: 4500,
    }
}

/// Writes `records` as a CSV dataset in `dir` and returns its path.
pub fn write_dataset(dir: &Path, records: &[Record]) -> PathBuf {
    let header: Vec<&str> = COLUMNS.iter().map(|c| c.header).collect();
    let mut content = header.join(",");
    content.push('\n');

    for r in records {
        content.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{}\n",
            r.month,
            r.positive_sentiment,
            r.negative_sentiment,
            r.mention_volume,
            r.dominant_topic,
            r.crisis_detected,
            r.response_time_hours,
            r.primary_channel,
            r.citizen_trust_index,
            r.communication_interventions,
            r.positive_mentions,
            r.negative_mentions,
        ));
    }

    let path = dir.join("dataset.csv");
    fs::write(&path, content).expect("Failed to write test dataset");
    path
}

/// Stderr subscriber for debugging tests, level from RUST_LOG (default WARN).
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
