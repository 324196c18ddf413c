use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::{Database, WordStoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Accepts the casing used by the built-in seed list ("Easy"/"Medium"/
    /// "Hard") as well as the canonical lowercase column values.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

/// Persisted as integers 0/1/2 in the `reviewFlag` column. Early builds of
/// the app treated the column as binary; the tri-state model is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    NotStarted,
    InReview,
    Learned,
}

impl ReviewState {
    pub fn as_i64(&self) -> i64 {
        match self {
            ReviewState::NotStarted => 0,
            ReviewState::InReview => 1,
            ReviewState::Learned => 2,
        }
    }

    pub fn from_i64(v: i64) -> Self {
        match v {
            1 => ReviewState::InReview,
            2 => ReviewState::Learned,
            _ => ReviewState::NotStarted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: i64,
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub image: Option<String>,
    pub audio: Option<String>,
    pub difficulty: Difficulty,
    pub favorite: bool,
    pub review_state: ReviewState,
    pub created_at: String,
    pub updated_at: String,
}

/// Mutable fields of an entry, used for insert and full update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDraft {
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub image: Option<String>,
    pub audio: Option<String>,
    pub difficulty: Difficulty,
    pub favorite: bool,
    pub review_state: ReviewState,
}

impl WordDraft {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            example: None,
            image: None,
            audio: None,
            difficulty: Difficulty::Medium,
            favorite: false,
            review_state: ReviewState::NotStarted,
        }
    }

    fn validate(&self) -> Result<(), WordStoreError> {
        if self.word.trim().is_empty() {
            return Err(WordStoreError::Validation("word must not be empty"));
        }
        if self.meaning.trim().is_empty() {
            return Err(WordStoreError::Validation("meaning must not be empty"));
        }
        Ok(())
    }
}

/// Inserts a new entry and returns its assigned id.
pub async fn add_word(db: &Database, draft: &WordDraft) -> Result<i64, WordStoreError> {
    draft.validate()?;

    let now = Utc::now().naive_utc();
    let result = sqlx::query(
        r#"
        INSERT INTO "words" ("word", "meaning", "example", "image", "audio",
                             "difficulty", "favorite", "reviewFlag", "created_at", "updated_at")
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.word)
    .bind(&draft.meaning)
    .bind(&draft.example)
    .bind(&draft.image)
    .bind(&draft.audio)
    .bind(draft.difficulty.as_str())
    .bind(draft.favorite as i64)
    .bind(draft.review_state.as_i64())
    .bind(now)
    .bind(now)
    .execute(db.pool())
    .await;

    match result {
        Ok(done) => Ok(done.last_insert_rowid()),
        Err(err) if is_unique_violation(&err) => {
            Err(WordStoreError::DuplicateWord(draft.word.clone()))
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn get_word_by_id(db: &Database, id: i64) -> Result<WordEntry, WordStoreError> {
    let row = sqlx::query(r#"SELECT * FROM "words" WHERE "id" = ? LIMIT 1"#)
        .bind(id)
        .fetch_optional(db.pool())
        .await?;
    row.map(|r| map_word(&r)).ok_or(WordStoreError::NotFound)
}

/// All entries, most recently created first.
pub async fn get_all_words(db: &Database) -> Result<Vec<WordEntry>, WordStoreError> {
    let rows = sqlx::query(r#"SELECT * FROM "words" ORDER BY "created_at" DESC, "id" DESC"#)
        .fetch_all(db.pool())
        .await?;
    Ok(rows.iter().map(map_word).collect())
}

pub async fn get_words_by_difficulty(
    db: &Database,
    difficulty: Difficulty,
) -> Result<Vec<WordEntry>, WordStoreError> {
    let rows = sqlx::query(
        r#"
        SELECT * FROM "words"
        WHERE "difficulty" = ?
        ORDER BY "created_at" DESC, "id" DESC
        "#,
    )
    .bind(difficulty.as_str())
    .fetch_all(db.pool())
    .await?;
    Ok(rows.iter().map(map_word).collect())
}

pub async fn get_favorite_words(db: &Database) -> Result<Vec<WordEntry>, WordStoreError> {
    let rows = sqlx::query(
        r#"
        SELECT * FROM "words"
        WHERE "favorite" = 1
        ORDER BY "created_at" DESC, "id" DESC
        "#,
    )
    .fetch_all(db.pool())
    .await?;
    Ok(rows.iter().map(map_word).collect())
}

/// Entries currently in review (state 1 only; learned words are not
/// re-surfaced by the review screen).
pub async fn get_words_for_review(db: &Database) -> Result<Vec<WordEntry>, WordStoreError> {
    let rows = sqlx::query(
        r#"
        SELECT * FROM "words"
        WHERE "reviewFlag" = 1
        ORDER BY "created_at" DESC, "id" DESC
        "#,
    )
    .fetch_all(db.pool())
    .await?;
    Ok(rows.iter().map(map_word).collect())
}

/// Case-insensitive substring match against word or meaning.
pub async fn search_words(db: &Database, term: &str) -> Result<Vec<WordEntry>, WordStoreError> {
    let pattern = format!("%{}%", term);
    let rows = sqlx::query(
        r#"
        SELECT * FROM "words"
        WHERE "word" LIKE ? OR "meaning" LIKE ?
        ORDER BY "created_at" DESC, "id" DESC
        "#,
    )
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(db.pool())
    .await?;
    Ok(rows.iter().map(map_word).collect())
}

pub async fn get_random_word(db: &Database) -> Result<WordEntry, WordStoreError> {
    let row = sqlx::query(r#"SELECT * FROM "words" ORDER BY RANDOM() LIMIT 1"#)
        .fetch_optional(db.pool())
        .await?;
    row.map(|r| map_word(&r)).ok_or(WordStoreError::EmptyStore)
}

/// Full replace of the mutable fields; bumps `updated_at`.
pub async fn update_word(
    db: &Database,
    id: i64,
    draft: &WordDraft,
) -> Result<(), WordStoreError> {
    draft.validate()?;

    let now = Utc::now().naive_utc();
    let result = sqlx::query(
        r#"
        UPDATE "words"
        SET "word" = ?, "meaning" = ?, "example" = ?, "image" = ?, "audio" = ?,
            "difficulty" = ?, "favorite" = ?, "reviewFlag" = ?, "updated_at" = ?
        WHERE "id" = ?
        "#,
    )
    .bind(&draft.word)
    .bind(&draft.meaning)
    .bind(&draft.example)
    .bind(&draft.image)
    .bind(&draft.audio)
    .bind(draft.difficulty.as_str())
    .bind(draft.favorite as i64)
    .bind(draft.review_state.as_i64())
    .bind(now)
    .bind(id)
    .execute(db.pool())
    .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => Err(WordStoreError::NotFound),
        Ok(_) => Ok(()),
        Err(err) if is_unique_violation(&err) => {
            Err(WordStoreError::DuplicateWord(draft.word.clone()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Flips the favorite flag and returns the new value.
pub async fn toggle_favorite(db: &Database, id: i64) -> Result<bool, WordStoreError> {
    let current = get_word_by_id(db, id).await?;
    let new_value = !current.favorite;

    let now = Utc::now().naive_utc();
    sqlx::query(r#"UPDATE "words" SET "favorite" = ?, "updated_at" = ? WHERE "id" = ?"#)
        .bind(new_value as i64)
        .bind(now)
        .bind(id)
        .execute(db.pool())
        .await?;

    Ok(new_value)
}

pub async fn set_review_state(
    db: &Database,
    id: i64,
    state: ReviewState,
) -> Result<(), WordStoreError> {
    let now = Utc::now().naive_utc();
    let done = sqlx::query(r#"UPDATE "words" SET "reviewFlag" = ?, "updated_at" = ? WHERE "id" = ?"#)
        .bind(state.as_i64())
        .bind(now)
        .bind(id)
        .execute(db.pool())
        .await?;

    if done.rows_affected() == 0 {
        return Err(WordStoreError::NotFound);
    }
    Ok(())
}

pub async fn delete_word(db: &Database, id: i64) -> Result<(), WordStoreError> {
    let done = sqlx::query(r#"DELETE FROM "words" WHERE "id" = ?"#)
        .bind(id)
        .execute(db.pool())
        .await?;

    if done.rows_affected() == 0 {
        return Err(WordStoreError::NotFound);
    }
    Ok(())
}

pub async fn delete_all_words(db: &Database) -> Result<(), WordStoreError> {
    sqlx::query(r#"DELETE FROM "words""#).execute(db.pool()).await?;
    Ok(())
}

pub async fn count_words(db: &Database) -> Result<i64, WordStoreError> {
    let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "words""#)
        .fetch_one(db.pool())
        .await?;
    Ok(count)
}

/// Existence check by exact word text.
pub async fn word_exists(db: &Database, word: &str) -> Result<bool, WordStoreError> {
    let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "words" WHERE "word" = ?"#)
        .bind(word)
        .fetch_one(db.pool())
        .await?;
    Ok(count > 0)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

fn map_word(row: &SqliteRow) -> WordEntry {
    let created_at: NaiveDateTime = row
        .try_get("created_at")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at: NaiveDateTime = row
        .try_get("updated_at")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let difficulty: String = row
        .try_get("difficulty")
        .unwrap_or_else(|_| "medium".to_string());
    let favorite: i64 = row.try_get("favorite").unwrap_or(0);
    let review_flag: i64 = row.try_get("reviewFlag").unwrap_or(0);

    WordEntry {
        id: row.try_get("id").unwrap_or_default(),
        word: row.try_get("word").unwrap_or_default(),
        meaning: row.try_get("meaning").unwrap_or_default(),
        example: row.try_get("example").ok().flatten(),
        image: row.try_get("image").ok().flatten(),
        audio: row.try_get("audio").ok().flatten(),
        difficulty: Difficulty::parse(&difficulty),
        favorite: favorite != 0,
        review_state: ReviewState::from_i64(review_flag),
        created_at: format_naive_iso(created_at),
        updated_at: format_naive_iso(updated_at),
    }
}

fn format_naive_iso(value: NaiveDateTime) -> String {
    DateTime::<Utc>::from_naive_utc_and_offset(value, Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
