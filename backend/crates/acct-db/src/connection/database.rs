use crate::{DbError, Result as DbErrorResult};

use acct_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

/// Opens SQLite pools with the users schema applied
pub struct Database;

impl Database {
    /// Open (creating if missing) the database file at `path` and run migrations
    pub async fn open(path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Database connection established: {}", path.display());

        Self::migrate(&pool).await?;

        Ok(pool)
    }

    /// Private in-memory database; one connection that never idles out,
    /// otherwise the data would vanish with it
    pub async fn open_in_memory() -> DbErrorResult<SqlitePool> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrate(&pool).await?;

        Ok(pool)
    }

    pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Database migrations complete");

        Ok(())
    }
}
