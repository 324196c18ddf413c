pub mod config;
pub mod db;
pub mod logging;
pub mod seed;
pub mod services;
pub mod storage;

use crate::config::StorageConfig;
use crate::db::{Database, DbInitError};

/// Opens the local store at the configured path: schema bootstrap plus the
/// seed import when the word table is empty. Safe to call on every launch.
pub async fn open_store(config: &StorageConfig) -> Result<Database, DbInitError> {
    let db = Database::open(config).await?;
    seed::seed_words_if_empty(&db)
        .await
        .map_err(|err| match err {
            db::WordStoreError::Sqlx(e) => DbInitError::Sqlx(e),
            other => DbInitError::Config(other.to_string()),
        })?;
    Ok(db)
}
