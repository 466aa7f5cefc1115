//! Per-subsection processors.

pub mod caste;
pub mod drinking_water;
pub mod literacy;
pub mod occupation;
pub mod religion;
pub mod remittance_amount;
pub mod remittance_expense;
pub mod road_status;
pub mod toilet;

use palika_db::models::ward_category::WardCategoryRow;

use crate::section::{SectionId, SectionReport};

/// Run the processor for `id` over its fetched rows.
pub fn process(id: SectionId, municipality: &str, rows: &[WardCategoryRow]) -> SectionReport {
    match id {
        SectionId::Religion => religion::process(municipality, rows),
        SectionId::Caste => caste::process(municipality, rows),
        SectionId::Occupation => occupation::process(municipality, rows),
        SectionId::RemittanceExpenses => remittance_expense::process(municipality, rows),
        SectionId::RemittanceAmountGroup => remittance_amount::process(municipality, rows),
        SectionId::RoadStatus => road_status::process(municipality, rows),
        SectionId::DrinkingWaterSource => drinking_water::process(municipality, rows),
        SectionId::Literacy => literacy::process(municipality, rows),
        SectionId::ToiletType => toilet::process(municipality, rows),
    }
}
