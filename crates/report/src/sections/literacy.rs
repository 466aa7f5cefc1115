//! Literacy subsection.

use palika_core::categories::LiteracyStatus;
use palika_core::locale::{format_count, format_percentage};
use palika_core::CategoryGroup;
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<LiteracyStatus>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::Literacy, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा साक्षरता सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let find = |code: &str| agg.buckets.iter().find(|b| b.code == code);
    let literate = find(LiteracyStatus::BothReadWrite.code());
    let illiterate = find(LiteracyStatus::Illiterate.code());

    let mut out = format!(
        "{municipality}मा पाँच वर्षमाथिको जनसंख्यामध्ये पढ्न लेख्न जान्ने जनसंख्या {count} अर्थात् {pct} प्रतिशत रहेको छ ।",
        count = format_count(literate.map_or(0, |b| b.count)),
        pct = format_percentage(literate.map_or(0.0, |b| b.percentage)),
    );
    if let Some(illiterate) = illiterate.filter(|b| b.count > 0) {
        out.push_str(&format!(
            " अझै {count} जना ({pct} प्रतिशत) निरक्षर रहेका छन् ।",
            count = format_count(illiterate.count),
            pct = format_percentage(illiterate.percentage),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::row;

    #[test]
    fn reports_literate_and_illiterate_shares() {
        let rows = vec![
            row(1, "BOTH_READ_WRITE", 750),
            row(1, "READ_ONLY", 50),
            row(1, "ILLITERATE", 200),
        ];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(report.narrative_np.contains("७५०"));
        assert!(report.narrative_np.contains("७५.००"));
        assert!(report.narrative_np.contains("निरक्षर"));
    }
}
