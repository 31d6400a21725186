//! Handlers for asset submission and listing.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use assetwatch_core::asset::AssetInput;
use assetwatch_core::output;
use assetwatch_core::validation::validate_batch;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body returned after a batch is accepted.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    /// Number of assets created or updated.
    pub processed: usize,
}

// ---------------------------------------------------------------------------
// POST /asset
// ---------------------------------------------------------------------------

/// Create or update a batch of assets.
///
/// The whole batch is validated before any write. On the first violation
/// nothing is stored and the failure is returned as a 400.
pub async fn submit_assets(
    State(state): State<AppState>,
    payload: Result<Json<Vec<AssetInput>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(batch) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Malformed asset payload");
        AppError::BadRequest(rejection.body_text())
    })?;

    let submitted = batch.len();
    let records = validate_batch(batch).map_err(|err| {
        tracing::warn!(code = err.code(), error = %err, submitted, "Asset batch rejected");
        err
    })?;

    let processed = state.store.upsert_batch(records).await;
    tracing::info!(processed, "Asset batch stored");

    Ok(Json(SubmitResponse {
        message: format!("Successfully created/updated {processed} assets"),
        processed,
    }))
}

// ---------------------------------------------------------------------------
// GET /asset
// ---------------------------------------------------------------------------

/// List every stored asset with its status as of today (UTC).
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_all().await;
    let today = state.clock.today();
    let assets = output::format_all(&records, today);

    tracing::info!(count = assets.len(), %today, "Retrieved assets");
    Ok(Json(assets))
}
