//! Remittance amount-band subsection.
//!
//! Each amount band keeps its own bucket; the bands are reported
//! separately, never collapsed.

use palika_core::categories::RemittanceAmountGroup;
use palika_core::locale::{format_count, format_percentage};
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<RemittanceAmountGroup>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::RemittanceAmountGroup, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा विप्रेषण रकम सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let top = agg.top_n(1);
    format!(
        "{municipality}मा विप्रेषण पठाउने {total} जनामध्ये सबैभन्दा ठूलो समूह वार्षिक {label} पठाउनेको रहेको छ, जुन {count} जना अर्थात् {pct} प्रतिशत हो ।",
        total = format_count(agg.total),
        label = top[0].label_np,
        count = format_count(top[0].count),
        pct = format_percentage(top[0].percentage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::row;

    #[test]
    fn bands_stay_distinct() {
        let rows = vec![
            row(1, "RS_0_TO_49999", 120),
            row(1, "RS_50000_TO_99999", 310),
            row(1, "RS_100000_TO_199999", 95),
        ];
        let report = process("नमूना गाउँपालिका", &rows);
        let non_zero: Vec<_> = report.buckets.iter().filter(|b| b.count > 0).collect();
        assert_eq!(non_zero.len(), 3);
        assert!(report.narrative_np.contains("५० हजारदेखि १ लाखसम्म"));
    }
}
