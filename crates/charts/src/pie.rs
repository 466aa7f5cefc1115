//! Pie chart rendering.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::palette::color;
use crate::{esc, positive_total, ChartEntry};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 400;
const CX: f64 = 200.0;
const CY: f64 = 200.0;
const RADIUS: f64 = 160.0;
const LEGEND_X: u32 = 400;

/// Render a pie chart over the positive entries.
///
/// Returns `None` when no entry has a positive value; otherwise a complete
/// SVG document string. Entries with zero or negative values are omitted
/// from the chart but keep their palette position stable.
pub fn pie_chart(entries: &[ChartEntry]) -> Option<String> {
    let total = positive_total(entries);
    if total == 0 {
        return None;
    }

    let mut svg = String::with_capacity(4 * 1024);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}"><rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    );

    let positive: Vec<(usize, &ChartEntry)> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.value > 0)
        .collect();

    if positive.len() == 1 {
        // A single slice is a full disc; the arc path would degenerate.
        let (i, _) = positive[0];
        let _ = write!(
            svg,
            r#"<circle cx="{CX}" cy="{CY}" r="{RADIUS}" fill="{fill}" stroke="white" stroke-width="1"/>"#,
            fill = color(i),
        );
    } else {
        // Slices start at 12 o'clock and run clockwise.
        let mut angle = -PI / 2.0;
        for (i, entry) in &positive {
            let fraction = entry.value as f64 / total as f64;
            let sweep = fraction * 2.0 * PI;
            let (x1, y1) = (CX + RADIUS * angle.cos(), CY + RADIUS * angle.sin());
            let end = angle + sweep;
            let (x2, y2) = (CX + RADIUS * end.cos(), CY + RADIUS * end.sin());
            let large_arc = i32::from(fraction > 0.5);
            let _ = write!(
                svg,
                r#"<path d="M {CX:.2} {CY:.2} L {x1:.2} {y1:.2} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} Z" fill="{fill}" stroke="white" stroke-width="1"/>"#,
                fill = color(*i),
            );
            angle = end;
        }
    }

    // Legend: swatch, label, value and percentage.
    for (row, (i, entry)) in positive.iter().enumerate() {
        let y = 40 + row as u32 * 26;
        let pct = entry.value as f64 / total as f64 * 100.0;
        let _ = write!(
            svg,
            r#"<rect x="{LEGEND_X}" y="{y}" width="14" height="14" fill="{fill}"/><text x="{tx}" y="{ty}" font-size="13" font-family="sans-serif">{label} — {value} ({pct:.1}%)</text>"#,
            fill = color(*i),
            tx = LEGEND_X + 20,
            ty = y + 12,
            label = esc(&entry.label),
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
    fn returns_none_for_empty_input() {
        assert_eq!(pie_chart(&[]), None);
    }

    #[test]
    fn returns_none_when_all_values_are_zero() {
        let entries = vec![ChartEntry::new("a", 0), ChartEntry::new("b", 0)];
        assert_eq!(pie_chart(&entries), None);
    }

    #[test]
    fn renders_non_empty_svg_for_positive_values() {
        let entries = vec![ChartEntry::new("हिन्दू", 45931), ChartEntry::new("बौद्ध", 2412)];
        let svg = pie_chart(&entries).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("हिन्दू"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn single_positive_slice_renders_a_full_disc() {
        let entries = vec![ChartEntry::new("only", 10), ChartEntry::new("none", 0)];
        let svg = pie_chart(&entries).unwrap();
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn escapes_markup_in_labels() {
        let entries = vec![ChartEntry::new("a<b>&c", 5)];
        let svg = pie_chart(&entries).unwrap();
        assert!(svg.contains("a&lt;b&gt;&amp;c"));
    }
}
