//! Database access layer for journal
//!
//! Pool construction plus a one-shot schema bootstrap. There is no
//! migration framework; the single `entries` table is created if missing
//! and otherwise assumed externally managed.

use anyhow::{Context, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::str::FromStr;

pub mod entries;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT,
    status      TEXT NOT NULL DEFAULT 'PLANNED',
    difficulty  TEXT,
    tags        TEXT,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
)
"#;

/// Connect to the database named by `database_url` (e.g.
/// `sqlite://journal.db`), creating the file and the entries table on
/// first run.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to database")?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Ensure the entries table exists
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA)
        .execute(pool)
        .await
        .context("Failed to initialize entries table")?;
    Ok(())
}
