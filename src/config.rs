use std::path::{Path, PathBuf};

const APP_DIR: &str = "com.vocabutech.app";
const DB_FILE: &str = "vocabutech.db";

#[derive(Debug, Clone)]
pub struct StorageConfig {
    db_path: PathBuf,
    pub log_level: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let db_path = std::env::var("VOCABUTECH_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self { db_path, log_level }
    }

    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            log_level: "info".to_string(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

fn default_db_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let app_data = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(app_data).join(APP_DIR).join(DB_FILE)
    }

    #[cfg(not(target_os = "windows"))]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(DB_FILE)
    }
}
