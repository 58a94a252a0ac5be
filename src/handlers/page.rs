use axum::{extract::State, response::Html};
use tracing::{instrument, trace};

use crate::schemas::AppState;

/// Serves the composed dashboard page
#[instrument(skip(state))]
pub async fn dashboard_page(State(state): State<AppState>) -> Html<String> {
    trace!("Serving dashboard page ({} bytes)", state.dashboard.html.len());
    Html(state.dashboard.html.clone())
}
