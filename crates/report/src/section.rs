//! Report section identifiers and the assembled section payload.

use serde::Serialize;

use palika_charts::{bar_chart, pie_chart};

use crate::aggregate::{Bucket, CategoryAggregate, WardBreakdown};

/// Every aggregated report subsection, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Religion,
    Caste,
    Occupation,
    RemittanceExpenses,
    RemittanceAmountGroup,
    RoadStatus,
    DrinkingWaterSource,
    Literacy,
    ToiletType,
}

impl SectionId {
    /// All sections in report order.
    pub const ALL: &'static [SectionId] = &[
        Self::Religion,
        Self::Caste,
        Self::Occupation,
        Self::RemittanceExpenses,
        Self::RemittanceAmountGroup,
        Self::RoadStatus,
        Self::DrinkingWaterSource,
        Self::Literacy,
        Self::ToiletType,
    ];

    /// URL-safe identifier used in routes and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Religion => "religion",
            Self::Caste => "caste",
            Self::Occupation => "occupation",
            Self::RemittanceExpenses => "remittance-expenses",
            Self::RemittanceAmountGroup => "remittance-amount-group",
            Self::RoadStatus => "road-status",
            Self::DrinkingWaterSource => "drinking-water-source",
            Self::Literacy => "literacy",
            Self::ToiletType => "toilet-type",
        }
    }

    /// Nepali section heading.
    pub fn title_np(self) -> &'static str {
        match self {
            Self::Religion => "धर्म अनुसार जनसंख्या",
            Self::Caste => "जातजाति अनुसार जनसंख्या",
            Self::Occupation => "मुख्य पेशाका आधारमा जनसंख्या",
            Self::RemittanceExpenses => "विप्रेषण खर्चको क्षेत्र",
            Self::RemittanceAmountGroup => "विप्रेषण रकम समूह",
            Self::RoadStatus => "सडकको अवस्था",
            Self::DrinkingWaterSource => "खानेपानीको मुख्य स्रोत",
            Self::Literacy => "साक्षरताको अवस्था",
            Self::ToiletType => "चर्पीको प्रकार",
        }
    }

    /// Parse a route identifier.
    pub fn parse(id: &str) -> Option<SectionId> {
        Self::ALL.iter().copied().find(|s| s.as_str() == id)
    }
}

/// A fully assembled report subsection.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub id: &'static str,
    pub title_np: &'static str,
    /// Canned Nepali sentences with Devanagari-digit interpolation.
    pub narrative_np: String,
    pub total: i64,
    pub buckets: Vec<Bucket>,
    pub wards: Vec<WardBreakdown>,
    /// Inline SVG; `None` when the section has no positive data.
    pub pie_svg: Option<String>,
    pub bar_svg: Option<String>,
}

impl SectionReport {
    /// Assemble a section from its aggregate and narrative, rendering the
    /// charts from the non-zero buckets.
    pub fn from_parts(id: SectionId, narrative_np: String, agg: CategoryAggregate) -> Self {
        let entries = agg.chart_entries();
        Self {
            id: id.as_str(),
            title_np: id.title_np(),
            narrative_np,
            total: agg.total,
            pie_svg: pie_chart(&entries),
            bar_svg: bar_chart(&entries),
            buckets: agg.buckets,
            wards: agg.wards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_id_parses_back() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::parse(id.as_str()), Some(*id));
        }
        assert_eq!(SectionId::parse("no-such-section"), None);
    }

    #[test]
    fn empty_aggregate_yields_no_charts() {
        let agg = crate::aggregate_rows::<palika_core::categories::Religion>(&[]);
        let section = SectionReport::from_parts(SectionId::Religion, "x".into(), agg);
        assert!(section.pie_svg.is_none());
        assert!(section.bar_svg.is_none());
        assert_eq!(section.total, 0);
    }
}
