use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{ApiResponse, ChartResponse, ChartSpec, ChartsResponse};
use tracing::{debug, instrument, warn};

use crate::schemas::{AppState, ErrorResponse};

/// Get every chart specification, in page order
#[utoipa::path(
    get,
    path = "/api/v1/charts",
    tag = "charts",
    responses(
        (status = 200, description = "Charts retrieved successfully", body = ChartsResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_charts(State(state): State<AppState>) -> Json<ApiResponse<Vec<ChartSpec>>> {
    let charts = state.dashboard.charts.clone();
    debug!("Returning {} charts", charts.len());

    Json(ApiResponse {
        data: charts,
        message: "Charts retrieved successfully".to_string(),
        success: true,
    })
}

/// Get one chart specification by id
#[utoipa::path(
    get,
    path = "/api/v1/charts/{chart_id}",
    tag = "charts",
    params(
        ("chart_id" = String, Path, description = "Chart identifier, e.g. trust-trend"),
    ),
    responses(
        (status = 200, description = "Chart retrieved successfully", body = ChartResponse),
        (status = 404, description = "Chart not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_chart(
    Path(chart_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ChartSpec>>, (StatusCode, Json<ErrorResponse>)> {
    match state.dashboard.chart(&chart_id) {
        Some(chart) => Ok(Json(ApiResponse {
            data: chart.clone(),
            message: "Chart retrieved successfully".to_string(),
            success: true,
        })),
        None => {
            warn!("Chart {} not found", chart_id);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(
                    "CHART_NOT_FOUND",
                    format!("Chart '{}' does not exist", chart_id),
                )),
            ))
        }
    }
}
