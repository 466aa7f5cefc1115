//! Handlers for the aggregated report sections.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use palika_report::{sections, SectionId, SectionReport};

use crate::error::{AppError, AppResult};
use crate::handlers::fetch_section_rows;
use crate::response::DataResponse;
use crate::state::AppState;

/// One entry in the section listing.
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub id: &'static str,
    pub title_np: &'static str,
}

/// GET /api/v1/reports/sections -- list every aggregated section.
pub async fn list_sections() -> Json<DataResponse<Vec<SectionSummary>>> {
    let data = SectionId::ALL
        .iter()
        .map(|id| SectionSummary {
            id: id.as_str(),
            title_np: id.title_np(),
        })
        .collect();
    Json(DataResponse { data })
}

fn parse_section(section: &str) -> Result<SectionId, AppError> {
    SectionId::parse(section)
        .ok_or_else(|| AppError::NotFound(format!("no report section named '{section}'")))
}

/// GET /api/v1/reports/{section} -- one aggregated section as JSON.
pub async fn get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<Json<DataResponse<SectionReport>>> {
    let id = parse_section(&section)?;
    let rows = fetch_section_rows(&state.pool, id).await?;
    let report = sections::process(id, &state.config.municipality_name, &rows);
    Ok(Json(DataResponse { data: report }))
}

/// GET /api/v1/reports/{section}/chart.svg -- the section's pie chart.
///
/// Returns 404 when the section has no positive data, leaving the caller
/// to omit the chart.
pub async fn get_section_chart(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_section(&section)?;
    let rows = fetch_section_rows(&state.pool, id).await?;
    let report = sections::process(id, &state.config.municipality_name, &rows);

    let svg = report
        .pie_svg
        .ok_or_else(|| AppError::NotFound(format!("section '{section}' has no chart data")))?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
