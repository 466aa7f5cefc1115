//! Maps each section to the repository that backs it.
//!
//! The one place the section-to-table wiring lives; the API handlers and
//! the chart export command both go through it, so adding a section means
//! extending exactly one match.

use palika_db::models::tables::{
    CasteTable, DrinkingWaterSourceTable, LiteracyStatusTable, OccupationTable,
    ReligionTable, RemittanceAmountGroupTable, RemittanceExpenseTable, RoadStatusTable,
    ToiletTypeTable,
};
use palika_db::models::ward_category::WardCategoryRow;
use palika_db::repositories::WardCategoryRepo;
use palika_db::DbPool;

use crate::section::SectionId;

/// Fetch the ward-wise rows backing one report section.
pub async fn fetch_section_rows(
    pool: &DbPool,
    id: SectionId,
) -> Result<Vec<WardCategoryRow>, sqlx::Error> {
    match id {
        SectionId::Religion => WardCategoryRepo::<ReligionTable>::list(pool).await,
        SectionId::Caste => WardCategoryRepo::<CasteTable>::list(pool).await,
        SectionId::Occupation => WardCategoryRepo::<OccupationTable>::list(pool).await,
        SectionId::RemittanceExpenses => {
            WardCategoryRepo::<RemittanceExpenseTable>::list(pool).await
        }
        SectionId::RemittanceAmountGroup => {
            WardCategoryRepo::<RemittanceAmountGroupTable>::list(pool).await
        }
        SectionId::RoadStatus => WardCategoryRepo::<RoadStatusTable>::list(pool).await,
        SectionId::DrinkingWaterSource => {
            WardCategoryRepo::<DrinkingWaterSourceTable>::list(pool).await
        }
        SectionId::Literacy => WardCategoryRepo::<LiteracyStatusTable>::list(pool).await,
        SectionId::ToiletType => WardCategoryRepo::<ToiletTypeTable>::list(pool).await,
    }
}
