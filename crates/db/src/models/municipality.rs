//! Municipality-wide aggregate rows.

use serde::Serialize;
use sqlx::FromRow;

use palika_core::types::{DbId, Timestamp};

/// A row from `municipality_wide_religion_population`.
///
/// Derived by the religion seed command as the per-religion sum over the
/// ward-wise table; never edited directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MunicipalityWideReligionPopulation {
    pub id: DbId,
    pub religion: String,
    pub population: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
