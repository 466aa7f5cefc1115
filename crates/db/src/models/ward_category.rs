//! The shared ward-wise row shape and the table descriptor trait.

use serde::Serialize;
use sqlx::FromRow;

use palika_core::types::{DbId, Timestamp};

/// A row from any ward-wise survey table.
///
/// The category and value columns are aliased to `category` / `value` in
/// every query so one struct serves all nine tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WardCategoryRow {
    pub id: DbId,
    pub ward_number: i16,
    pub category: String,
    pub value: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A per-category sum across all wards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategorySum {
    pub category: String,
    pub total: i64,
}

/// Compile-time description of one ward-wise survey table.
///
/// Implemented by the zero-sized descriptors in [`crate::models::tables`];
/// the generic repository builds its SQL from these constants.
pub trait WardCategoryTable {
    /// Table name.
    const TABLE: &'static str;
    /// Category column name, e.g. `religion`.
    const CATEGORY_COLUMN: &'static str;
    /// Value column name, e.g. `population` or `households`.
    const VALUE_COLUMN: &'static str;
}
