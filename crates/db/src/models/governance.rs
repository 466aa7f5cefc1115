//! Governance entities: elected representatives and civil organizations.
//!
//! Simple descriptive records listed verbatim in the governance report
//! section; no aggregation runs over them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palika_core::types::{DbId, Timestamp};

/// A row from the `elected_representatives` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ElectedRepresentative {
    pub id: DbId,
    pub full_name: String,
    pub position: String,
    pub ward_number: Option<i16>,
    pub party: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an elected representative.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateElectedRepresentative {
    pub full_name: String,
    pub position: String,
    pub ward_number: Option<i16>,
    pub party: Option<String>,
    pub phone: Option<String>,
}

/// A row from the `civil_organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CivilOrganization {
    pub id: DbId,
    pub name: String,
    pub kind: String,
    pub ward_number: Option<i16>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a civil organization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCivilOrganization {
    pub name: String,
    pub kind: String,
    pub ward_number: Option<i16>,
}
