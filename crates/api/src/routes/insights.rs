use axum::routing::get;
use axum::Router;

use crate::handlers::insights;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/insights", get(insights::get_insights))
}
