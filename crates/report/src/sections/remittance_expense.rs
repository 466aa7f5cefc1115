//! Remittance expense subsection.

use palika_core::categories::RemittanceExpense;
use palika_core::locale::{format_count, format_percentage};
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<RemittanceExpense>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::RemittanceExpenses, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा विप्रेषण खर्च सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let top = agg.top_n(2);
    let mut out = format!(
        "{municipality}मा विप्रेषण प्राप्त गर्ने घरपरिवारमध्ये सबैभन्दा बढी {count} घरपरिवार अर्थात् {pct} प्रतिशतले {label}मा खर्च गर्ने गरेका छन् ।",
        count = format_count(top[0].count),
        pct = format_percentage(top[0].percentage),
        label = top[0].label_np,
    );
    if let Some(second) = top.get(1) {
        out.push_str(&format!(
            " त्यसपछि {label}मा खर्च गर्ने घरपरिवार {count} ({pct} प्रतिशत) रहेका छन् ।",
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
    fn household_use_leads_when_largest() {
        let rows = vec![
            row(1, "HOUSEHOLD_USE", 640),
            row(1, "EDUCATION", 180),
            row(2, "HOUSEHOLD_USE", 410),
        ];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(report.narrative_np.contains("घरायसी प्रयोग"));
        assert!(report.narrative_np.contains("१०५०"));
        assert!(report.narrative_np.contains("शिक्षा"));
    }
}
