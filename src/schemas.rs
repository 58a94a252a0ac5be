use chrono::{DateTime, Utc};
use common::{
    AxisBinding, ChartKind, ChartResponse, ChartSpec, ChartsResponse, ColorScale, CrisisFlag,
    DatasetResponse, Datum, Record, ScaleKind, Series, SizeEncoding, Theme,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::dashboard::DashboardBundle;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Immutable dashboard built at startup
    pub dashboard: Arc<DashboardBundle>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of records in the Working Dataset
    pub records: usize,
    /// Number of charts on the page
    pub charts: usize,
    /// When the dashboard was built
    pub built_at: DateTime<Utc>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::dataset::get_dataset,
        crate::handlers::charts::get_charts,
        crate::handlers::charts::get_chart,
    ),
    components(
        schemas(
            DatasetResponse,
            ChartsResponse,
            ChartResponse,
            ErrorResponse,
            HealthResponse,
            Record,
            CrisisFlag,
            ChartSpec,
            ChartKind,
            AxisBinding,
            SizeEncoding,
            ColorScale,
            ScaleKind,
            Theme,
            Series,
            Datum,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dataset", description = "Working dataset endpoints"),
        (name = "charts", description = "Chart specification endpoints"),
    ),
    info(
        title = "Trustboard API",
        description = "Citizen trust dashboard - dataset and chart specifications behind the dashboard page",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
