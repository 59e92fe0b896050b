use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    SqlitePool,
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the database at `url`, creating the file if needed, and applies pending migrations.
pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("invalid database url {url}"))?
        .create_if_missing(true)
        .foreign_keys(true);

    let db_pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("could not open {url}"))?;

    migrate(&db_pool).await?;
    tracing::info!(url, "database ready");
    Ok(db_pool)
}

/// A single-connection in-memory database, migrated and ready for tests.
///
/// Every connection to `sqlite::memory:` gets its own database, so the pool
/// must never open a second one.
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    migrate(&db_pool).await?;
    Ok(db_pool)
}

pub async fn migrate(db_pool: &SqlitePool) -> anyhow::Result<()> {
    MIGRATOR
        .run(db_pool)
        .await
        .context("failed to apply migrations")
}
