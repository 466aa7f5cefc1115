//! Handler for the governance listing section.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use palika_db::models::governance::{CivilOrganization, ElectedRepresentative};
use palika_db::repositories::{CivilOrganizationRepo, ElectedRepresentativeRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// The governance section: plain listings, no aggregation.
#[derive(Debug, Serialize)]
pub struct GovernanceSection {
    pub representatives: Vec<ElectedRepresentative>,
    pub organizations: Vec<CivilOrganization>,
}

/// GET /api/v1/reports/governance -- representatives and organizations.
pub async fn get_governance(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<GovernanceSection>>> {
    let representatives = ElectedRepresentativeRepo::list(&state.pool).await?;
    let organizations = CivilOrganizationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: GovernanceSection {
            representatives,
            organizations,
        },
    }))
}
