use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the report section routes under `/reports`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reports/sections", get(handlers::reports::list_sections))
        .route(
            "/reports/governance",
            get(handlers::governance::get_governance),
        )
        .route("/reports/{section}", get(handlers::reports::get_section))
        .route(
            "/reports/{section}/chart.svg",
            get(handlers::reports::get_section_chart),
        )
}
