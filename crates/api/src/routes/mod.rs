pub mod health;
pub mod report_document;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reports/sections                 list section ids and titles
/// /reports/governance               representatives + organizations listing
/// /reports/{section}                one aggregated section (JSON)
/// /reports/{section}/chart.svg      the section's pie chart (SVG)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(reports::router())
}
