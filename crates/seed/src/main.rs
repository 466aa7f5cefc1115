use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palika_seed::cli::Cli;
use palika_seed::commands;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palika_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = palika_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    palika_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if let Err(err) = commands::run(&pool, cli.command).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
