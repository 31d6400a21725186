use axum::routing::get;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// ```text
/// GET    /asset   -> list_assets
/// POST   /asset   -> submit_assets
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/asset",
        get(assets::list_assets).post(assets::submit_assets),
    )
}
