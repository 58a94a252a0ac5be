use axum::{extract::State, response::Json};
use common::{ApiResponse, DatasetResponse, Record};
use tracing::{debug, instrument};

use crate::schemas::AppState;

/// Get the Working Dataset behind the charts
#[utoipa::path(
    get,
    path = "/api/v1/dataset",
    tag = "dataset",
    responses(
        (status = 200, description = "Dataset retrieved successfully", body = DatasetResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dataset(State(state): State<AppState>) -> Json<ApiResponse<Vec<Record>>> {
    let records = state.dashboard.records.clone();
    debug!("Returning {} records", records.len());

    Json(ApiResponse {
        data: records,
        message: "Dataset retrieved successfully".to_string(),
        success: true,
    })
}
