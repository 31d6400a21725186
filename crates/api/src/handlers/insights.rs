use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use assetwatch_core::insights;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /insights -- aggregate metrics over the current portfolio.
///
/// An empty store yields an empty list.
pub async fn get_insights(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_all().await;
    let insights = insights::compute(&records);

    if insights.is_empty() {
        tracing::info!("No assets in portfolio");
    } else {
        tracing::info!(count = insights.len(), assets = records.len(), "Generated insights");
    }
    Ok(Json(insights))
}
