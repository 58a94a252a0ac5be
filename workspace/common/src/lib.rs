//! Common transport-layer types shared between the compute crate and the web server.
//! The server serializes these straight into its JSON API, so field names here
//! are part of the public contract.

mod chart;
mod record;

pub use chart::{
    AxisBinding, ChartKind, ChartSpec, ColorScale, Datum, ScaleKind, Series, SizeEncoding, Theme,
};
pub use record::{CrisisFlag, Record};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    DatasetResponse = ApiResponse<Vec<Record>>,
    ChartsResponse = ApiResponse<Vec<ChartSpec>>,
    ChartResponse = ApiResponse<ChartSpec>
)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
