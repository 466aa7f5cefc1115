//! Road status subsection.

use palika_core::categories::RoadStatus;
use palika_core::locale::{format_count, format_percentage};
use palika_core::CategoryGroup;
use palika_db::models::ward_category::WardCategoryRow;

use crate::aggregate::{aggregate_rows, CategoryAggregate};
use crate::section::{SectionId, SectionReport};

pub fn process(municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    let agg = aggregate_rows::<RoadStatus>(rows);
    let narrative = narrative(municipality, &agg);
    SectionReport::from_parts(SectionId::RoadStatus, narrative, agg)
}

fn narrative(municipality: &str, agg: &CategoryAggregate) -> String {
    if agg.total == 0 {
        return format!("{municipality}मा सडक सुविधा सम्बन्धी तथ्याङ्क उपलब्ध छैन ।");
    }

    let top = agg.top_n(1);
    let mut out = format!(
        "{municipality}मा सडकको अवस्था हेर्दा सबैभन्दा बढी {count} घरपरिवार अर्थात् {pct} प्रतिशत {label}को पहुँचमा रहेका छन् ।",
        count = format_count(top[0].count),
        pct = format_percentage(top[0].percentage),
        label = top[0].label_np,
    );
    let no_road = agg
        .buckets
        .iter()
        .find(|b| b.code == RoadStatus::NoRoad.code());
    if let Some(no_road) = no_road.filter(|b| b.count > 0) {
        out.push_str(&format!(
            " भने {count} घरपरिवार ({pct} प्रतिशत) अझै सडक सुविधाबाट वञ्चित रहेका छन् ।",
            count = format_count(no_road.count),
            pct = format_percentage(no_road.percentage),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::row;

    #[test]
    fn mentions_households_without_roads() {
        let rows = vec![
            row(1, "EARTHEN", 700),
            row(1, "GRAVELED", 250),
            row(1, "NO_ROAD", 50),
        ];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(report.narrative_np.contains("कच्ची सडक"));
        assert!(report.narrative_np.contains("वञ्चित"));
    }

    #[test]
    fn omits_the_no_road_sentence_when_everyone_has_access() {
        let rows = vec![row(1, "BLACK_TOPPED", 400)];
        let report = process("नमूना गाउँपालिका", &rows);
        assert!(!report.narrative_np.contains("वञ्चित"));
    }
}
