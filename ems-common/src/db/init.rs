//! Database initialization
//!
//! Opens (creating if needed) the database file and ensures the
//! `employees` table exists. Safe to run against an initialized database.

use crate::config::DatabaseConfig;
use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::info;

/// Open the database and create tables if needed
///
/// Called once at startup; an error here must stop the process before it
/// begins serving requests.
pub async fn init_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    let db_path = &config.path;
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // busy_timeout is set on the connect options so every pooled
    // connection gets it, not just the first one
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_employees_table(&pool).await?;

    Ok(pool)
}

/// Create the `employees` table (idempotent)
///
/// AUTOINCREMENT keeps ids of deleted rows from being handed out again.
/// The CHECK constraints repeat the API's field rules.
pub async fn create_employees_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 255),
            age INTEGER NOT NULL CHECK (age > 0 AND age <= 150),
            salary REAL NOT NULL CHECK (salary > 0),
            department TEXT NOT NULL CHECK (length(department) BETWEEN 1 AND 100),
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
