pub mod keys;

use crate::db::Database;

// Progress data is advisory; failures here must never block word
// browsing. Every operation degrades: a failed read behaves as an absent
// key and a failed write is logged and dropped.

/// Reads a value from the flat key/value store.
pub async fn get(db: &Database, key: &str) -> Option<String> {
    let result: Result<Option<String>, sqlx::Error> =
        sqlx::query_scalar(r#"SELECT "value" FROM "app_storage" WHERE "key" = ?"#)
            .bind(key)
            .fetch_optional(db.pool())
            .await;

    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "storage read failed, treating as absent");
            None
        }
    }
}

/// Writes a value, replacing any existing one.
pub async fn set(db: &Database, key: &str, value: &str) {
    let result = sqlx::query(
        r#"INSERT OR REPLACE INTO "app_storage" ("key", "value") VALUES (?, ?)"#,
    )
    .bind(key)
    .bind(value)
    .execute(db.pool())
    .await;

    if let Err(err) = result {
        tracing::warn!(key, error = %err, "storage write failed");
    }
}

pub async fn remove(db: &Database, key: &str) {
    let result = sqlx::query(r#"DELETE FROM "app_storage" WHERE "key" = ?"#)
        .bind(key)
        .execute(db.pool())
        .await;

    if let Err(err) = result {
        tracing::warn!(key, error = %err, "storage delete failed");
    }
}

/// Convenience for integer-valued keys; unparsable values count as absent.
pub async fn get_i64(db: &Database, key: &str) -> Option<i64> {
    get(db, key).await.and_then(|v| v.parse().ok())
}

pub async fn set_i64(db: &Database, key: &str, value: i64) {
    set(db, key, &value.to_string()).await;
}
