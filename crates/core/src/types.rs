//! Shared primitive type aliases.

/// Surrogate primary key type used by every entity table.
pub type DbId = i64;

/// Timestamp type matching the `timestamptz` columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
