use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use trustboard::config::{DEFAULT_BIND_ADDRESS, Settings};
use trustboard::dashboard::build_dashboard;

/// Builds the dashboard and writes the page as a standalone HTML file.
pub fn render(dataset_path: &Path, output: &Path) -> Result<()> {
    let settings = Settings::new(dataset_path, DEFAULT_BIND_ADDRESS);
    let dashboard = build_dashboard(&settings)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Creating output directory {}", parent.display());
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(output, &dashboard.html)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        "Wrote dashboard with {} charts to {}",
        dashboard.charts.len(),
        output.display()
    );
    Ok(())
}
