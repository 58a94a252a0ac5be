use anyhow::Result;
use compute::DEFAULT_DATASET_FILE;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::dashboard::build_dashboard;
use crate::schemas::AppState;

/// Default bind address of the web server
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// CSV dataset location
    pub dataset_path: PathBuf,
    /// Address the web server binds to
    pub bind_address: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_FILE),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl Settings {
    pub fn new(dataset_path: impl Into<PathBuf>, bind_address: impl Into<String>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            bind_address: bind_address.into(),
        }
    }
}

/// Runs the startup pipeline and wraps the result in the shared application state.
#[instrument]
pub fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    info!("Building dashboard from {}", settings.dataset_path.display());
    let dashboard = build_dashboard(settings)?;
    debug!(
        "Dashboard built with {} records and {} charts",
        dashboard.records.len(),
        dashboard.charts.len()
    );

    Ok(AppState {
        dashboard: Arc::new(dashboard),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_use_fixed_dataset_file() {
        let settings = Settings::default();
        assert_eq!(
            settings.dataset_path,
            PathBuf::from("fcc_sensing_simulacion-segundo intento.csv")
        );
        assert_eq!(settings.bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_initialize_app_state_without_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path().join("missing.csv"), DEFAULT_BIND_ADDRESS);

        let state = initialize_app_state(&settings).unwrap();

        assert_eq!(state.dashboard.records.len(), 3);
        assert_eq!(state.dashboard.charts.len(), 3);
    }
}
