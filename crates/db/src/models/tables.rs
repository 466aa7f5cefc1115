//! Descriptors for the nine ward-wise survey tables.

use super::ward_category::WardCategoryTable;

// ---------------------------------------------------------------------------
// Demographics
// ---------------------------------------------------------------------------

/// `ward_wise_religion_population`: population by religion per ward.
pub struct ReligionTable;

impl WardCategoryTable for ReligionTable {
    const TABLE: &'static str = "ward_wise_religion_population";
    const CATEGORY_COLUMN: &'static str = "religion";
    const VALUE_COLUMN: &'static str = "population";
}

/// `ward_wise_caste_population`: population by caste/ethnicity per ward.
pub struct CasteTable;

impl WardCategoryTable for CasteTable {
    const TABLE: &'static str = "ward_wise_caste_population";
    const CATEGORY_COLUMN: &'static str = "caste";
    const VALUE_COLUMN: &'static str = "population";
}

// ---------------------------------------------------------------------------
// Economics
// ---------------------------------------------------------------------------

/// `ward_wise_major_occupation`: population by major occupation per ward.
pub struct OccupationTable;

impl WardCategoryTable for OccupationTable {
    const TABLE: &'static str = "ward_wise_major_occupation";
    const CATEGORY_COLUMN: &'static str = "occupation";
    const VALUE_COLUMN: &'static str = "population";
}

/// `ward_wise_remittance_expenses`: households by main remittance expense.
pub struct RemittanceExpenseTable;

impl WardCategoryTable for RemittanceExpenseTable {
    const TABLE: &'static str = "ward_wise_remittance_expenses";
    const CATEGORY_COLUMN: &'static str = "remittance_expense";
    const VALUE_COLUMN: &'static str = "households";
}

/// `ward_wise_remittance_amount_group`: sending population by amount band.
pub struct RemittanceAmountGroupTable;

impl WardCategoryTable for RemittanceAmountGroupTable {
    const TABLE: &'static str = "ward_wise_remittance_amount_group";
    const CATEGORY_COLUMN: &'static str = "amount_group";
    const VALUE_COLUMN: &'static str = "sending_population";
}

// ---------------------------------------------------------------------------
// Infrastructure
// ---------------------------------------------------------------------------

/// `ward_wise_road_status`: households by road access status.
pub struct RoadStatusTable;

impl WardCategoryTable for RoadStatusTable {
    const TABLE: &'static str = "ward_wise_road_status";
    const CATEGORY_COLUMN: &'static str = "road_status";
    const VALUE_COLUMN: &'static str = "households";
}

/// `ward_wise_drinking_water_source`: households by drinking water source.
pub struct DrinkingWaterSourceTable;

impl WardCategoryTable for DrinkingWaterSourceTable {
    const TABLE: &'static str = "ward_wise_drinking_water_source";
    const CATEGORY_COLUMN: &'static str = "water_source";
    const VALUE_COLUMN: &'static str = "households";
}

// ---------------------------------------------------------------------------
// Social
// ---------------------------------------------------------------------------

/// `ward_wise_literacy_status`: population (5+) by literacy status.
pub struct LiteracyStatusTable;

impl WardCategoryTable for LiteracyStatusTable {
    const TABLE: &'static str = "ward_wise_literacy_status";
    const CATEGORY_COLUMN: &'static str = "literacy_status";
    const VALUE_COLUMN: &'static str = "population";
}

// ---------------------------------------------------------------------------
// Environment / sanitation
// ---------------------------------------------------------------------------

/// `ward_wise_toilet_type`: households by toilet type.
pub struct ToiletTypeTable;

impl WardCategoryTable for ToiletTypeTable {
    const TABLE: &'static str = "ward_wise_toilet_type";
    const CATEGORY_COLUMN: &'static str = "toilet_type";
    const VALUE_COLUMN: &'static str = "households";
}
