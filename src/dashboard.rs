pub mod figure;
pub mod page;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use common::{ChartSpec, Record};
use compute::default_pipeline;
use tracing::{info, instrument};

use crate::config::Settings;
use page::{Page, PAGE_TITLE, compose_page};

/// Everything the server needs, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct DashboardBundle {
    /// Working Dataset: loaded rows followed by the forecast rows
    pub records: Vec<Record>,
    /// Chart specifications, in page order
    pub charts: Vec<ChartSpec>,
    /// Composed page
    pub page: Page,
    /// Rendered HTML of `page`
    pub html: String,
    /// When the bundle was built
    pub built_at: DateTime<Utc>,
}

impl DashboardBundle {
    /// Chart specification by id
    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.id == id)
    }
}

/// Runs load -> augment -> build -> compose.
///
/// A missing dataset file is not an error; an unreadable or malformed one is.
#[instrument(skip(settings), fields(dataset = %settings.dataset_path.display()))]
pub fn build_dashboard(settings: &Settings) -> Result<DashboardBundle> {
    let (records, charts) = default_pipeline(&settings.dataset_path).with_context(|| {
        format!(
            "Failed to prepare dataset {}",
            settings.dataset_path.display()
        )
    })?;

    let page = compose_page(PAGE_TITLE, &charts).context("Failed to render chart figures")?;
    let html = page.render_html().context("Failed to render dashboard page")?;
    info!(
        "Dashboard composed: {} records, {} sections",
        records.len(),
        page.sections.len()
    );

    Ok(DashboardBundle {
        records,
        charts,
        page,
        html,
        built_at: Utc::now(),
    })
}
