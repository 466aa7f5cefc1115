//! Toilet type subsection.

use palika_core::categories::ToiletType;
use palika_core::locale::{format_count, format_percentage};
use palika_core::CategoryGroup;
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<ToiletType>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::ToiletType, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा सरसफाइ सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let top = agg.top_n(1);
    let mut out = format!(
        "{municipality}मा सरसफाइको अवस्था हेर्दा {count} घरपरिवार अर्थात् {pct} प्रतिशतले {label} प्रयोग गर्ने गरेका छन् ।",
        count = format_count(top[0].count),
        pct = format_percentage(top[0].percentage),
        label = top[0].label_np,
    );
    let no_toilet = agg
        .buckets
        .iter()
        .find(|b| b.code == ToiletType::NoToilet.code());
    if let Some(no_toilet) = no_toilet.filter(|b| b.count > 0) {
        out.push_str(&format!(
            " {count} घरपरिवार ({pct} प्रतिशत) मा अझै चर्पी नभएको अवस्था छ ।",
            count = format_count(no_toilet.count),
            pct = format_percentage(no_toilet.percentage),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::row;

    #[test]
    fn highlights_households_without_toilets() {
        let rows = vec![
            row(1, "ORDINARY", 600),
            row(1, "FLUSH_SEPTIC_TANK", 300),
            row(1, "NO_TOILET", 100),
        ];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(report.narrative_np.contains("साधारण चर्पी"));
        assert!(report.narrative_np.contains("चर्पी नभएको"));
    }
}
