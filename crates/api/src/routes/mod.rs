pub mod assets;
pub mod health;
pub mod insights;

use axum::Router;

use crate::state::AppState;

/// Build the asset API route tree.
///
/// ```text
/// /asset        submit batch (POST), list with status (GET)
/// /insights     portfolio insights (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(assets::router())
        .merge(insights::router())
}
