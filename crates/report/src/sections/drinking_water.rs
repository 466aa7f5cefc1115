//! Drinking water source subsection.

use palika_core::categories::DrinkingWaterSource;
use palika_core::locale::{format_count, format_percentage};
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<DrinkingWaterSource>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::DrinkingWaterSource, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा खानेपानीको स्रोत सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let top = agg.top_n(2);
    let mut out = format!(
        "{municipality}मा खानेपानीको मुख्य स्रोतका रूपमा {label} प्रयोग गर्ने घरपरिवार {count} अर्थात् {pct} प्रतिशत रहेका छन् ।",
        label = top[0].label_np,
        count = format_count(top[0].count),
        pct = format_percentage(top[0].percentage),
    );
    if let Some(second) = top.get(1) {
        out.push_str(&format!(
            " त्यसपछि {label}बाट खानेपानी प्रयोग गर्ने {count} घरपरिवार ({pct} प्रतिशत) छन् ।",
            label = second.label_np,
            count = format_count(second.count),
            pct = format_percentage(second.percentage),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::row;

    #[test]
    fn piped_tap_leads() {
        let rows = vec![row(1, "PIPED_TAP", 820), row(1, "SPRING", 140)];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(report.narrative_np.contains("पाइपधारा"));
        assert!(report.narrative_np.contains("मूल धारा"));
    }
}
