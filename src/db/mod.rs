pub mod operations;
pub mod schema;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::config::StorageConfig;
use crate::db::schema::{split_sql_statements, SCHEMA_SQL, SCHEMA_VERSION};

/// Handle to the local store. Cloning is cheap (shares the pool); one
/// handle is constructed at startup and passed to every consumer.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if missing) the database at the configured path and
    /// brings the schema up to date. Idempotent; a second call against an
    /// already-initialized file is a no-op beyond the connection check.
    pub async fn open(config: &StorageConfig) -> Result<Self, DbInitError> {
        Self::open_path(config.db_path()).await
    }

    pub async fn open_path(db_path: &Path) -> Result<Self, DbInitError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DbInitError::Io(e.to_string()))?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
        let options = SqliteConnectOptions::from_str(&db_url)
            .map_err(|e| DbInitError::Config(e.to_string()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(DbInitError::Sqlx)?;

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(&self) -> Result<(), DbInitError> {
        let version: Option<String> = sqlx::query_scalar(
            r#"SELECT "value" FROM "_db_metadata" WHERE "key" = 'schema_version'"#,
        )
        .fetch_optional(&self.pool)
        .await
        .unwrap_or(None);

        if version.is_some() {
            return Ok(());
        }

        for stmt in split_sql_statements(SCHEMA_SQL) {
            sqlx::query(&stmt)
                .execute(&self.pool)
                .await
                .map_err(DbInitError::Sqlx)?;
        }

        sqlx::query(
            r#"INSERT OR REPLACE INTO "_db_metadata" ("key", "value") VALUES ('schema_version', ?)"#,
        )
        .bind(SCHEMA_VERSION)
        .execute(&self.pool)
        .await
        .map_err(DbInitError::Sqlx)?;

        tracing::info!(version = SCHEMA_VERSION, "database schema created");
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum DbInitError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum WordStoreError {
    #[error("word not found")]
    NotFound,
    #[error("word already exists: {0}")]
    DuplicateWord(String),
    #[error("validation failed: {0}")]
    Validation(&'static str),
    #[error("word store is empty")]
    EmptyStore,
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
