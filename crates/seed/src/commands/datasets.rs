//! The nine ward-wise dataset commands.
//!
//! Each is a thin wrapper pairing a table descriptor with its hardcoded
//! dataset. Religion additionally rebuilds the municipality-wide aggregate
//! from the freshly written ward rows.

use palika_db::models::tables::{
    CasteTable, DrinkingWaterSourceTable, LiteracyStatusTable, OccupationTable,
    ReligionTable, RemittanceAmountGroupTable, RemittanceExpenseTable, RoadStatusTable,
    ToiletTypeTable,
};
use palika_db::repositories::{MunicipalityReligionRepo, WardCategoryRepo};
use palika_db::DbPool;

use crate::cli::SeedArgs;
use crate::data;
use crate::runner::{print_summary, seed_ward_table, SeedError};

pub async fn religion(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::demographics::WARD_RELIGION_POPULATION;
    let outcome = seed_ward_table::<ReligionTable, _>(pool, "religion", records, args).await?;
    print_summary(&outcome, records);
    if args.dry_run {
        return Ok(());
    }

    // The municipality-wide table is derived, so it is always rebuilt from
    // the ward sums rather than seeded independently.
    let sums = WardCategoryRepo::<ReligionTable>::sum_by_category(pool).await?;
    let mut tx = pool.begin().await?;
    MunicipalityReligionRepo::clear(&mut *tx).await?;
    for sum in &sums {
        MunicipalityReligionRepo::upsert(&mut *tx, &sum.category, sum.total).await?;
    }
    tx.commit().await?;
    println!("municipality-religion: rebuilt {} aggregate rows", sums.len());
    Ok(())
}

pub async fn caste(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::demographics::WARD_CASTE_POPULATION;
    let outcome = seed_ward_table::<CasteTable, _>(pool, "caste", records, args).await?;
    print_summary(&outcome, records);
    Ok(())
}

pub async fn occupation(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::economics::WARD_MAJOR_OCCUPATION;
    let outcome = seed_ward_table::<OccupationTable, _>(pool, "occupation", records, args).await?;
    print_summary(&outcome, records);
    Ok(())
}

pub async fn remittance_expenses(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::economics::WARD_REMITTANCE_EXPENSES;
    let outcome =
        seed_ward_table::<RemittanceExpenseTable, _>(pool, "remittance-expenses", records, args)
            .await?;
    print_summary(&outcome, records);
    Ok(())
}

pub async fn remittance_amount_group(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::economics::WARD_REMITTANCE_AMOUNT_GROUP;
    let outcome = seed_ward_table::<RemittanceAmountGroupTable, _>(
        pool,
        "remittance-amount-group",
        records,
        args,
    )
    .await?;
    print_summary(&outcome, records);
    Ok(())
}

pub async fn road_status(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::infrastructure::WARD_ROAD_STATUS;
    let outcome = seed_ward_table::<RoadStatusTable, _>(pool, "road-status", records, args).await?;
    print_summary(&outcome, records);
    Ok(())
}

pub async fn drinking_water(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::infrastructure::WARD_DRINKING_WATER_SOURCE;
    let outcome =
        seed_ward_table::<DrinkingWaterSourceTable, _>(pool, "drinking-water", records, args)
            .await?;
    print_summary(&outcome, records);
    Ok(())
}

pub async fn literacy(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::social::WARD_LITERACY_STATUS;
    let outcome =
        seed_ward_table::<LiteracyStatusTable, _>(pool, "literacy", records, args).await?;
    print_summary(&outcome, records);
    Ok(())
}

pub async fn toilet_type(pool: &DbPool, args: SeedArgs) -> Result<(), SeedError> {
    let records = data::environment::WARD_TOILET_TYPE;
    let outcome =
        seed_ward_table::<ToiletTypeTable, _>(pool, "toilet-type", records, args).await?;
    print_summary(&outcome, records);
    Ok(())
}
