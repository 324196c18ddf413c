use chrono::NaiveDate;

use crate::db::operations::words;
use crate::db::{Database, WordStoreError};
use crate::services::progress::today;
use crate::storage::{self, keys};

/// Returns the word of the day, picking and persisting a fresh random one
/// when the calendar has rolled over. Stable for the whole day across
/// process restarts.
pub async fn daily_word(db: &Database) -> Result<words::WordEntry, WordStoreError> {
    daily_word_on(db, today()).await
}

pub async fn daily_word_on(
    db: &Database,
    today: NaiveDate,
) -> Result<words::WordEntry, WordStoreError> {
    let saved_date: Option<NaiveDate> = storage::get(db, keys::LAST_DAILY_DATE)
        .await
        .and_then(|raw| raw.parse().ok());
    let saved_word_id = storage::get_i64(db, keys::LAST_DAILY_WORD).await;

    if saved_date == Some(today) {
        if let Some(word_id) = saved_word_id {
            match words::get_word_by_id(db, word_id).await {
                Ok(word) => return Ok(word),
                // The chosen word disappeared; fall back to a fresh pick
                // for the rest of the day.
                Err(WordStoreError::NotFound) => {
                    let word = words::get_random_word(db).await?;
                    storage::set_i64(db, keys::LAST_DAILY_WORD, word.id).await;
                    tracing::debug!(word_id = word.id, "daily word re-picked after deletion");
                    return Ok(word);
                }
                Err(err) => return Err(err),
            }
        }
    }

    let word = words::get_random_word(db).await?;
    storage::set(db, keys::LAST_DAILY_DATE, &today.to_string()).await;
    storage::set_i64(db, keys::LAST_DAILY_WORD, word.id).await;
    tracing::debug!(word_id = word.id, %today, "daily word selected");
    Ok(word)
}
