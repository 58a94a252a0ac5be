#[cfg(test)]
pub mod test_utils {
    use crate::config::{DEFAULT_BIND_ADDRESS, Settings, initialize_app_state};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use common::{CrisisFlag, Record};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Header row of the dataset file, in file order.
    fn header_line() -> String {
        let headers: Vec<&str> = compute::schema::COLUMNS.iter().map(|c| c.header).collect();
        headers.join(",")
    }

    /// A plausible month of metrics with the given label and trust index.
    pub fn sample_record(month: &str, trust: f64) -> Record {
        Record {
            month: month.to_string(),
            positive_sentiment: 52.0,
            negative_sentiment: 48.0,
            mention_volume: 11000,
            dominant_topic: "transparencia".to_string(),
            crisis_detected: CrisisFlag::No,
            response_time_hours: 9.5,
            primary_channel: "Facebook".to_string(),
            citizen_trust_index: trust,
            communication_interventions: 3,
            positive_mentions: 5720,
            negative_mentions: 5280,
        }
    }

    /// Writes `records` as a CSV dataset in `dir` and returns its path.
    pub fn write_dataset(dir: &Path, records: &[Record]) -> PathBuf {
        let mut content = format!("{}\n", header_line());
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

    /// Create AppState for testing from a dataset file (which may be absent)
    pub fn setup_test_app_state(dataset_path: PathBuf) -> AppState {
        let settings = Settings::new(dataset_path, DEFAULT_BIND_ADDRESS);
        initialize_app_state(&settings).expect("Failed to initialize app state")
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    ///
    /// # Returns
    ///
    /// A guard that will clean up the subscriber when dropped.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app(dataset_path: PathBuf) -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state(dataset_path);
        create_router(state)
    }

    #[test]
    fn test_written_header_follows_dataset_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(dir.path(), &[sample_record("2023-12", 50.0)]);
        let content = fs::read_to_string(path).unwrap();

        let first_line = content.lines().next().unwrap();
        let headers: Vec<&str> = first_line.split(',').collect();
        assert_eq!(headers.len(), compute::schema::COLUMNS.len());
        assert_eq!(headers[0], compute::schema::MONTH.header);
        assert_eq!(headers[8], compute::schema::CITIZEN_TRUST_INDEX.header);
    }
}
