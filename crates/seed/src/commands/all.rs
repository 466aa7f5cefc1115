//! Runs every dataset command in report order.
//!
//! The default is fail-fast; `--skip-errors` runs every dataset regardless
//! and reports the failures at the end with a non-zero exit.

use std::future::Future;
use std::pin::Pin;

use palika_db::DbPool;

use crate::cli::AllArgs;
use crate::commands::{datasets, governance};
use crate::runner::SeedError;

type Step<'a> = (
    &'static str,
    Pin<Box<dyn Future<Output = Result<(), SeedError>> + 'a>>,
);

pub async fn run(pool: &DbPool, args: AllArgs) -> Result<(), SeedError> {
    let seed = args.seed;
    let steps: Vec<Step<'_>> = vec![
        ("religion", Box::pin(datasets::religion(pool, seed))),
        ("caste", Box::pin(datasets::caste(pool, seed))),
        ("occupation", Box::pin(datasets::occupation(pool, seed))),
        (
            "remittance-expenses",
            Box::pin(datasets::remittance_expenses(pool, seed)),
        ),
        (
            "remittance-amount-group",
            Box::pin(datasets::remittance_amount_group(pool, seed)),
        ),
        ("road-status", Box::pin(datasets::road_status(pool, seed))),
        ("drinking-water", Box::pin(datasets::drinking_water(pool, seed))),
        ("literacy", Box::pin(datasets::literacy(pool, seed))),
        ("toilet-type", Box::pin(datasets::toilet_type(pool, seed))),
        ("governance", Box::pin(governance::run(pool, seed))),
    ];

    let attempted = steps.len();
    let mut failures: Vec<(&'static str, SeedError)> = Vec::new();
    for (name, step) in steps {
        match step.await {
            Ok(()) => {}
            Err(err) if args.skip_errors => {
                tracing::error!(dataset = name, error = %err, "dataset failed, continuing");
                failures.push((name, err));
            }
            Err(err) => {
                tracing::error!(dataset = name, error = %err, "dataset failed, aborting");
                return Err(err);
            }
        }
    }

    if failures.is_empty() {
        println!("all datasets seeded ({attempted} commands)");
        Ok(())
    } else {
        for (name, err) in &failures {
            eprintln!("FAILED {name}: {err}");
        }
        Err(SeedError::Partial {
            failed: failures.len(),
            attempted,
        })
    }
}
