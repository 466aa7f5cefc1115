//! One module per subcommand, plus the dispatcher.

pub mod all;
pub mod charts;
pub mod datasets;
pub mod governance;

use palika_db::DbPool;

use crate::cli::Command;
use crate::runner::SeedError;

/// Run the parsed subcommand against the pool.
pub async fn run(pool: &DbPool, command: Command) -> Result<(), SeedError> {
    match command {
        Command::Religion(args) => datasets::religion(pool, args).await,
        Command::Caste(args) => datasets::caste(pool, args).await,
        Command::Occupation(args) => datasets::occupation(pool, args).await,
        Command::RemittanceExpenses(args) => datasets::remittance_expenses(pool, args).await,
        Command::RemittanceAmountGroup(args) => {
            datasets::remittance_amount_group(pool, args).await
        }
        Command::RoadStatus(args) => datasets::road_status(pool, args).await,
        Command::DrinkingWater(args) => datasets::drinking_water(pool, args).await,
        Command::Literacy(args) => datasets::literacy(pool, args).await,
        Command::ToiletType(args) => datasets::toilet_type(pool, args).await,
        Command::Governance(args) => governance::run(pool, args).await,
        Command::All(args) => all::run(pool, args).await,
        Command::Charts(args) => charts::run(pool, args).await,
    }
}
