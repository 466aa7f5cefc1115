//! HTTP handlers.

pub mod governance;
pub mod html;
pub mod reports;

pub(crate) use palika_report::fetch_section_rows;
