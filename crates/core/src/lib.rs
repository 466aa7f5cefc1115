//! Domain types for the municipal digital profile.
//!
//! Pure types and logic only: ward numbers, the category enums used across
//! every survey table, and the Nepali locale helpers that turn counts and
//! percentages into Devanagari report text. No I/O, no database access.

pub mod categories;
pub mod error;
pub mod locale;
pub mod types;
pub mod ward;

pub use categories::CategoryGroup;
pub use error::CoreError;
pub use ward::WardNumber;
