//! Row models and table descriptors.
//!
//! Every ward-wise survey table shares the same row shape, so a single
//! [`ward_category::WardCategoryRow`] model covers all of them and the
//! per-table differences (table name, category column, value column) live
//! in the [`ward_category::WardCategoryTable`] descriptors under
//! [`tables`]. Descriptive entities get their own structs.

pub mod governance;
pub mod municipality;
pub mod tables;
pub mod ward_category;
