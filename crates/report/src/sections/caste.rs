//! Caste/ethnicity subsection.

use palika_core::categories::CasteGroup;
use palika_core::locale::{format_count, format_percentage};
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<CasteGroup>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::Caste, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा जातजाति सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let top = agg.top_n(3);
    let mut out = format!(
        "{municipality}मा जातजातिका आधारमा हेर्दा {label} समुदायको जनसंख्या सबैभन्दा बढी {count} अर्थात् {pct} प्रतिशत रहेको छ ।",
        label = top[0].label_np,
        count = format_count(top[0].count),
        pct = format_percentage(top[0].percentage),
    );
    for bucket in top.iter().skip(1) {
        out.push_str(&format!(
            " {label} समुदायको जनसंख्या {count} ({pct} प्रतिशत) रहेको छ ।",
            label = bucket.label_np,
            count = format_count(bucket.count),
            pct = format_percentage(bucket.percentage),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::row;

    #[test]
    fn narrative_covers_top_three_groups() {
        let rows = vec![
            row(1, "CHHETRI", 500),
            row(1, "MAGAR", 300),
            row(1, "TAMANG", 150),
            row(1, "NEWAR", 50),
        ];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(report.narrative_np.contains("क्षेत्री"));
        assert!(report.narrative_np.contains("मगर"));
        assert!(report.narrative_np.contains("तामाङ"));
        assert!(!report.narrative_np.contains("नेवार"));
    }
}
