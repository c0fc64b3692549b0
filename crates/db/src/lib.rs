//! Database access for programs, surveys, survey types and categories.
//!
//! The heart of the crate is [`crud::CrudRepo`], one generic repository
//! instantiated per [`crud::Entity`]. Per-entity files under
//! [`repositories`] describe their table and add the eager-loading
//! `get_detail` lookups used by detail views.

use sqlx::postgres::PgPoolOptions;

pub mod crud;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Application tables, children first so they can be dropped in order.
const APP_TABLES: &[&str] = &[
    "base_questions",
    "categories",
    "surveys",
    "survey_types",
    "programs",
];

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Version of the latest successfully applied migration.
///
/// `None` when the migration ledger does not exist yet or is empty.
pub async fn schema_version(pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
    let has_ledger: bool =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
            .fetch_one(pool)
            .await?;
    if !has_ledger {
        return Ok(None);
    }
    sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success")
        .fetch_one(pool)
        .await
}

/// Apply every pending migration from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Drop every application table together with the migration ledger, so a
/// following [`run_migrations`] rebuilds the schema from scratch.
pub async fn drop_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for table in APP_TABLES.iter().chain(std::iter::once(&"_sqlx_migrations")) {
        tracing::info!(table, "Dropping table");
        sqlx::query(&format!("DROP TABLE IF EXISTS {table} CASCADE"))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DROP FUNCTION IF EXISTS set_updated_at() CASCADE")
        .execute(&mut *tx)
        .await?;
    tx.commit().await
}
