//! Nepali locale helpers.
//!
//! Report narratives interpolate counts and percentages as Devanagari
//! digits. Console output from the seed commands stays ASCII; only these
//! helpers produce Devanagari, and only the report layer calls them.

/// Replace every ASCII digit in `text` with the corresponding Devanagari
/// digit. Non-digit characters pass through unchanged.
pub fn to_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => '०',
            '1' => '१',
            '2' => '२',
            '3' => '३',
            '4' => '४',
            '5' => '५',
            '6' => '६',
            '7' => '७',
            '8' => '८',
            '9' => '९',
            other => other,
        })
        .collect()
}

/// Format an integer count as Devanagari digits.
pub fn format_count(count: i64) -> String {
    to_devanagari_digits(&count.to_string())
}

/// Format a percentage with two decimal places as Devanagari digits.
///
/// `103.0 / 3.0` renders as `३४.३३`.
pub fn format_percentage(pct: f64) -> String {
    to_devanagari_digits(&format!("{pct:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_all_ten_digits() {
        assert_eq!(to_devanagari_digits("0123456789"), "०१२३४५६७८९");
    }

    #[test]
    fn passes_through_non_digits() {
        assert_eq!(to_devanagari_digits("ward 5 / वडा"), "ward ५ / वडा");
    }

    #[test]
    fn formats_counts() {
        assert_eq!(format_count(45931), "४५९३१");
        assert_eq!(format_count(0), "०");
    }

    #[test]
    fn formats_percentages_to_two_decimals() {
        assert_eq!(format_percentage(91.2), "९१.२०");
        assert_eq!(format_percentage(100.0), "१००.००");
        assert_eq!(format_percentage(1.0 / 3.0 * 100.0), "३३.३३");
    }
}
