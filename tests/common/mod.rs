#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use vocabutech_core::config::StorageConfig;
use vocabutech_core::db::Database;

/// A store backed by a throwaway on-disk database. Keep the handle alive
/// for the duration of the test; the directory is removed on drop.
pub struct TestStore {
    pub db: Database,
    dir: TempDir,
}

impl TestStore {
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("test.db")
    }

    /// Simulates a process restart: a fresh handle over the same file.
    pub async fn reopen(&self) -> Database {
        Database::open_path(&self.db_path())
            .await
            .expect("failed to reopen test database")
    }
}

/// Schema plus the built-in seed list, as on a real first launch.
pub async fn seeded_store() -> TestStore {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = StorageConfig::with_db_path(dir.path().join("test.db"));
    let db = vocabutech_core::open_store(&config)
        .await
        .expect("failed to open seeded store");
    TestStore { db, dir }
}

/// Schema only, no seed rows.
pub async fn empty_store() -> TestStore {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db = Database::open_path(&dir.path().join("test.db"))
        .await
        .expect("failed to open empty store");
    TestStore { db, dir }
}
