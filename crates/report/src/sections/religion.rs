//! Religion subsection.

use palika_core::categories::Religion;
use palika_core::locale::{format_count, format_percentage};
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

/// Aggregate the ward-wise religion rows into the religion subsection.
pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<Religion>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::Religion, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा धर्म सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let top = agg.top_n(3);
    let mut out = format!(
        "{municipality}मा धर्मका आधारमा जनसंख्याको वितरण हेर्दा सबैभन्दा बढी {label} धर्म मान्ने जनसंख्या {count} अर्थात् {pct} प्रतिशत रहेको छ ।",
        label = top[0].label_np,
        count = format_count(top[0].count),
        pct = format_percentage(top[0].percentage),
    );
    if let Some(second) = top.get(1) {
        out.push_str(&format!(
            " त्यसपछि {label} धर्म मान्ने जनसंख्या {count} ({pct} प्रतिशत) रहेको छ ।",
            label = second.label_np,
            count = format_count(second.count),
            pct = format_percentage(second.percentage),
        ));
    }
    out.push_str(&format!(
        " समग्रमा गाउँपालिकाका {wards} वटा वडामा धार्मिक विविधता रहेको देखिन्छ ।",
        wards = format_count(agg.wards.len() as i64),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::row;

    #[test]
    fn narrative_names_the_leading_religion() {
        let rows = vec![row(1, "HINDU", 900), row(1, "BUDDHIST", 100)];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(report.narrative_np.contains("हिन्दू"));
        assert!(report.narrative_np.contains("९००"));
        assert!(report.narrative_np.contains("९०.००"));
        assert!(report.pie_svg.is_some());
    }

    #[test]
    fn empty_rows_yield_the_no_data_sentence() {
        let report = process("नमूना गाउँपालिका", &[]);
        assert!(report.narrative_np.contains("उपलब्ध छैन"));
        assert!(report.pie_svg.is_none());
    }
}
