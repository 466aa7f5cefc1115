//! Major occupation subsection.

use palika_core::categories::Occupation;
use palika_core::locale::{format_count, format_percentage};
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<Occupation>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::Occupation, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा पेशा सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let top = agg.top_n(2);
    let mut out = format!(
        "{municipality}का आर्थिक रूपले सक्रिय जनसंख्यामध्ये सबैभन्दा बढी {count} जना अर्थात् {pct} प्रतिशत {label} पेशामा संलग्न रहेका छन् ।",
        count = format_count(top[0].count),
        pct = format_percentage(top[0].percentage),
        label = top[0].label_np,
    );
    if let Some(second) = top.get(1) {
        out.push_str(&format!(
            " दोस्रोमा {label} पेशामा {count} जना ({pct} प्रतिशत) संलग्न छन् ।",
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
    fn agriculture_leads_the_narrative() {
        let rows = vec![
            row(1, "AGRICULTURE", 3200),
            row(2, "AGRICULTURE", 2100),
            row(1, "FOREIGN_EMPLOYMENT", 900),
        ];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(report.narrative_np.contains("कृषि"));
        assert!(report.narrative_np.contains("५३००"));
        assert!(report.narrative_np.contains("वैदेशिक रोजगारी"));
    }
}
