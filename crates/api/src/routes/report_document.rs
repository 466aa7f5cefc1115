use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the full HTML report at root level (`GET /report`).
pub fn router() -> Router<AppState> {
    Router::new().route("/report", get(handlers::html::get_report_document))
}
