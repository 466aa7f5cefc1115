//! Database-backed seeding tests.
//!
//! These need a running PostgreSQL server (`DATABASE_URL`), so they are
//! ignored by default; run them with `cargo test -- --ignored`.

use sqlx::PgPool;

use palika_db::models::tables::{CasteTable, ReligionTable, ToiletTypeTable};
use palika_db::repositories::{MunicipalityReligionRepo, WardCategoryRepo};
use palika_report::{fetch_section_rows, SectionId};
use palika_seed::cli::SeedArgs;
use palika_seed::commands::datasets;
use palika_seed::data;

const SEED: SeedArgs = SeedArgs {
    clear: false,
    dry_run: false,
};

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn religion_seed_is_idempotent(pool: PgPool) {
    datasets::religion(&pool, SEED).await.unwrap();
    let first = WardCategoryRepo::<ReligionTable>::count(&pool)
        .await
        .unwrap();
    assert_eq!(
        first as usize,
        data::demographics::WARD_RELIGION_POPULATION.len()
    );

    datasets::religion(&pool, SEED).await.unwrap();
    let second = WardCategoryRepo::<ReligionTable>::count(&pool)
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn clear_then_seed_leaves_exactly_the_dataset(pool: PgPool) {
    datasets::caste(&pool, SEED).await.unwrap();
    datasets::caste(
        &pool,
        SeedArgs {
            clear: true,
            dry_run: false,
        },
    )
    .await
    .unwrap();

    let count = WardCategoryRepo::<CasteTable>::count(&pool).await.unwrap();
    assert_eq!(count as usize, data::demographics::WARD_CASTE_POPULATION.len());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn municipality_hindu_aggregate_matches_ward_sums(pool: PgPool) {
    datasets::religion(&pool, SEED).await.unwrap();

    let hindu = MunicipalityReligionRepo::find_by_religion(&pool, "HINDU")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(hindu.population, 45931);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn fetch_section_rows_sees_every_seeded_section(pool: PgPool) {
    datasets::religion(&pool, SEED).await.unwrap();
    datasets::caste(&pool, SEED).await.unwrap();

    let religion = fetch_section_rows(&pool, SectionId::Religion).await.unwrap();
    assert_eq!(
        religion.len(),
        data::demographics::WARD_RELIGION_POPULATION.len()
    );
    let caste = fetch_section_rows(&pool, SectionId::Caste).await.unwrap();
    assert_eq!(caste.len(), data::demographics::WARD_CASTE_POPULATION.len());

    // Unseeded sections still resolve to their table, just empty.
    let literacy = fetch_section_rows(&pool, SectionId::Literacy).await.unwrap();
    assert!(literacy.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL server via DATABASE_URL"]
async fn dry_run_writes_nothing(pool: PgPool) {
    datasets::toilet_type(
        &pool,
        SeedArgs {
            clear: false,
            dry_run: true,
        },
    )
    .await
    .unwrap();

    let count = WardCategoryRepo::<ToiletTypeTable>::count(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
