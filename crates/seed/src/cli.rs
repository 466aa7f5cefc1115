//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Seed the municipal profile database with survey sample data.
#[derive(Debug, Parser)]
#[command(name = "palika-seed", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every dataset command.
#[derive(Debug, Clone, Copy, Args)]
pub struct SeedArgs {
    /// Delete existing rows for the dataset before seeding.
    #[arg(long)]
    pub clear: bool,

    /// Validate the dataset and report what would be written, without writing.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ward-wise religion data plus the municipality-wide aggregate.
    Religion(SeedArgs),
    /// Ward-wise caste/ethnicity population.
    Caste(SeedArgs),
    /// Ward-wise major occupation.
    Occupation(SeedArgs),
    /// Ward-wise remittance expense areas.
    RemittanceExpenses(SeedArgs),
    /// Ward-wise remittance amount bands.
    RemittanceAmountGroup(SeedArgs),
    /// Ward-wise road status.
    RoadStatus(SeedArgs),
    /// Ward-wise drinking water sources.
    DrinkingWater(SeedArgs),
    /// Ward-wise literacy status.
    Literacy(SeedArgs),
    /// Ward-wise toilet types.
    ToiletType(SeedArgs),
    /// Elected representatives and civil organizations.
    Governance(SeedArgs),
    /// Run every dataset command in order.
    All(AllArgs),
    /// Export SVG/PNG chart files for every report section.
    Charts(ChartsArgs),
}

#[derive(Debug, Args)]
pub struct AllArgs {
    #[command(flatten)]
    pub seed: SeedArgs,

    /// Continue past failing dataset commands and report them at the end.
    #[arg(long)]
    pub skip_errors: bool,
}

#[derive(Debug, Args)]
pub struct ChartsArgs {
    /// Directory the chart files are written into.
    #[arg(long, default_value = "static/charts")]
    pub out_dir: PathBuf,
}
