//! Shared seeding machinery.
//!
//! Every ward-wise dataset command funnels through [`seed_ward_table`]: the
//! records are validated up front, then written inside one transaction so a
//! failed dataset leaves the table untouched. `--dry-run` stops after
//! validation and reports what would have been written.
//!
//! Console output is plain ASCII; terminals without Devanagari fonts would
//! garble the Nepali labels, so the summary prints category codes instead.

use std::collections::BTreeMap;

use palika_core::{CategoryGroup, CoreError, WardNumber};
use palika_db::models::ward_category::WardCategoryTable;
use palika_db::repositories::WardCategoryRepo;
use palika_db::DbPool;

use crate::cli::SeedArgs;

/// Errors from seed commands.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("chart export failed: {0}")]
    Chart(#[from] palika_charts::ChartError),

    /// `all --skip-errors` finished with at least one failed dataset.
    #[error("{failed} of {attempted} dataset commands failed")]
    Partial { failed: usize, attempted: usize },
}

/// What one dataset command did, or would do under `--dry-run`.
#[derive(Debug, Clone, Copy)]
pub struct SeedOutcome {
    pub dataset: &'static str,
    pub cleared: u64,
    pub written: usize,
    pub dry_run: bool,
}

/// Validate and upsert one ward-wise dataset inside a transaction.
pub async fn seed_ward_table<T, C>(
    pool: &DbPool,
    dataset: &'static str,
    records: &[(i16, C, i64)],
    args: SeedArgs,
) -> Result<SeedOutcome, SeedError>
where
    T: WardCategoryTable,
    C: CategoryGroup,
{
    for (ward_number, _, value) in records {
        WardNumber::new(*ward_number)?;
        if *value < 0 {
            return Err(CoreError::Validation(format!(
                "{dataset}: negative value for ward {ward_number}"
            ))
            .into());
        }
    }

    if args.dry_run {
        return Ok(SeedOutcome {
            dataset,
            cleared: 0,
            written: records.len(),
            dry_run: true,
        });
    }

    let mut tx = pool.begin().await?;
    let cleared = if args.clear {
        WardCategoryRepo::<T>::clear(&mut *tx).await?
    } else {
        0
    };
    for (ward_number, category, value) in records {
        WardCategoryRepo::<T>::upsert(&mut *tx, *ward_number, category.code(), *value).await?;
    }
    tx.commit().await?;

    tracing::info!(dataset, rows = records.len(), cleared, "dataset seeded");
    Ok(SeedOutcome {
        dataset,
        cleared,
        written: records.len(),
        dry_run: false,
    })
}

/// Print the outcome line and a per-category breakdown with percentages.
pub fn print_summary<C: CategoryGroup>(outcome: &SeedOutcome, records: &[(i16, C, i64)]) {
    print_outcome(outcome);

    let mut totals: BTreeMap<&'static str, i64> = BTreeMap::new();
    for (_, category, value) in records {
        *totals.entry(category.code()).or_default() += value;
    }
    let grand_total: i64 = totals.values().sum();
    for (code, total) in &totals {
        let pct = if grand_total > 0 {
            *total as f64 / grand_total as f64 * 100.0
        } else {
            0.0
        };
        println!("  {code:<24} {total:>8}  {pct:>6.2}%");
    }
}

/// Print the outcome line alone, for datasets without a category breakdown.
pub fn print_outcome(outcome: &SeedOutcome) {
    if outcome.dry_run {
        println!(
            "[dry-run] {}: would write {} rows",
            outcome.dataset, outcome.written
        );
    } else {
        println!(
            "{}: wrote {} rows (cleared {})",
            outcome.dataset, outcome.written, outcome.cleared
        );
    }
}
