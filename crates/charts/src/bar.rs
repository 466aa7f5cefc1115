//! Horizontal bar chart rendering.

use std::fmt::Write as _;

use crate::palette::color;
use crate::{esc, positive_total, ChartEntry};

const WIDTH: u32 = 640;
const BAR_HEIGHT: u32 = 22;
const ROW_HEIGHT: u32 = 34;
const LABEL_WIDTH: u32 = 200;
const TOP_MARGIN: u32 = 20;
const RIGHT_MARGIN: u32 = 70;

/// Render a horizontal bar chart over the positive entries.
///
/// Returns `None` when no entry has a positive value. Bars are scaled
/// against the largest value; labels sit left of the bars, values to the
/// right.
pub fn bar_chart(entries: &[ChartEntry]) -> Option<String> {
    if positive_total(entries) == 0 {
        return None;
    }

    let positive: Vec<(usize, &ChartEntry)> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.value > 0)
        .collect();
    let max = positive.iter().map(|(_, e)| e.value).max().unwrap_or(1);
    let height = TOP_MARGIN * 2 + positive.len() as u32 * ROW_HEIGHT;
    let track_width = (WIDTH - LABEL_WIDTH - RIGHT_MARGIN) as f64;

    let mut svg = String::with_capacity(4 * 1024);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" viewBox="0 0 {WIDTH} {height}"><rect width="{WIDTH}" height="{height}" fill="white"/>"#
    );

    for (row, (i, entry)) in positive.iter().enumerate() {
        let y = TOP_MARGIN + row as u32 * ROW_HEIGHT;
        let bar_w = (entry.value as f64 / max as f64 * track_width).max(1.0);
        let _ = write!(
            svg,
            r#"<text x="{label_end}" y="{label_y}" font-size="13" font-family="sans-serif" text-anchor="end">{label}</text><rect x="{LABEL_WIDTH}" y="{y}" width="{bar_w:.1}" height="{BAR_HEIGHT}" fill="{fill}"/><text x="{value_x:.1}" y="{label_y}" font-size="12" font-family="sans-serif">{value}</text>"#,
            label_end = LABEL_WIDTH - 8,
            label_y = y + BAR_HEIGHT - 6,
            label = esc(&entry.label),
            fill = color(*i),
            value_x = LABEL_WIDTH as f64 + bar_w + 6.0,
            value = entry.value,
        );
    }

    svg.push_str("</svg>");
    Some(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_none_for_empty_or_zero_input() {
        assert_eq!(bar_chart(&[]), None);
        assert_eq!(bar_chart(&[ChartEntry::new("a", 0)]), None);
    }

    #[test]
    fn renders_one_bar_per_positive_entry() {
        let entries = vec![
            ChartEntry::new("कृषि", 3200),
            ChartEntry::new("व्यापार", 420),
            ChartEntry::new("खाली", 0),
        ];
        let svg = bar_chart(&entries).unwrap();
        assert_eq!(svg.matches("<rect x=\"200\"").count(), 2);
        assert!(svg.contains("कृषि"));
        assert!(!svg.contains("खाली"));
    }

    #[test]
    fn largest_value_fills_the_track() {
        let entries = vec![ChartEntry::new("big", 100), ChartEntry::new("small", 50)];
        let svg = bar_chart(&entries).unwrap();
        // Track width is 640 - 200 - 70 = 370.
        assert!(svg.contains(r#"width="370.0""#));
        assert!(svg.contains(r#"width="185.0""#));
    }
}
