//! Report processors.
//!
//! One processor per report subsection. Each takes the rows its repository
//! fetched, folds them through the generic category aggregator, assembles a
//! Nepali narrative paragraph from fixed sentence templates, and attaches
//! pie/bar charts. Processors are pure; the only database access is the
//! [`fetch`] helper that maps a section to its repository.

pub mod aggregate;
pub mod fetch;
pub mod section;
pub mod sections;

pub use aggregate::{aggregate_rows, Bucket, CategoryAggregate, WardBreakdown};
pub use fetch::fetch_section_rows;
pub use section::{SectionId, SectionReport};

#[cfg(test)]
pub(crate) mod testutil {
    use palika_db::models::ward_category::WardCategoryRow;

    /// Build a row with the given natural key and value; ids and
    /// timestamps are irrelevant to the processors.
    pub fn row(ward: i16, category: &str, value: i64) -> WardCategoryRow {
        WardCategoryRow {
            id: 0,
            ward_number: ward,
            category: category.to_string(),
            value,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }
}
