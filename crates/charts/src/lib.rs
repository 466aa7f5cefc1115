//! SVG chart generation.
//!
//! Builds pie and bar charts as plain SVG strings from `(label, value)`
//! data, with a fixed palette cycled per slice/bar. An optional export step
//! writes the SVG to disk and shells out to an external converter for a PNG
//! copy, falling back to the SVG artifact when no converter is available.

pub mod bar;
pub mod palette;
pub mod pie;
pub mod raster;

pub use bar::bar_chart;
pub use pie::pie_chart;
pub use raster::{export_chart, ChartArtifact};

/// One labeled value in a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub label: String,
    pub value: i64,
}

impl ChartEntry {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Errors from chart export.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to write chart file: {0}")]
    Io(#[from] std::io::Error),
}

/// Escape a label for embedding in SVG text nodes.
pub(crate) fn esc(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Sum of the positive values; charts render only when this is non-zero.
pub(crate) fn positive_total(entries: &[ChartEntry]) -> i64 {
    entries.iter().map(|e| e.value.max(0)).sum()
}
