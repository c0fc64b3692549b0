//! Create (or recreate) the survey schema in the database named by
//! `DATABASE_URL`.
//!
//! ```text
//! create-schema                  # apply pending migrations
//! create-schema --drop-existing  # drop every table first, then migrate
//! ```

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "create-schema", version, about = "Create the survey database schema")]
struct Cli {
    /// Drop all application tables before creating them again.
    #[arg(long)]
    drop_existing: bool,

    /// Database URL; falls back to the `DATABASE_URL` environment variable.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "create_schema=info,survey_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let pool = survey_db::create_pool(&cli.database_url, 1)
        .await
        .context("failed to connect to database")?;

    if cli.drop_existing {
        tracing::warn!("Dropping existing schema");
        survey_db::drop_schema(&pool)
            .await
            .context("failed to drop existing schema")?;
    }

    survey_db::run_migrations(&pool)
        .await
        .context("failed to apply migrations")?;
    tracing::info!("Schema is up to date");

    pool.close().await;
    Ok(())
}
