use chrono::Utc;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::operations::words::{self, Difficulty, WordEntry};
use crate::db::{Database, WordStoreError};
use crate::storage::{self, keys};

/// A quiz needs the correct word plus three distractors.
pub const MIN_QUIZ_WORDS: usize = 4;

pub const QUIZ_CORRECT_POINTS: i64 = 10;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("not enough words for a quiz: have {0}, need at least 4")]
    NotEnoughWords(usize),
    #[error(transparent)]
    Store(#[from] WordStoreError),
}

#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub word: WordEntry,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// One finished quiz run, as persisted in the JSON history. Field names
/// match the records written by earlier versions of the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub attempt_number: usize,
    pub date: String,
    pub score: usize,
    pub total_questions: usize,
    pub points_earned: i64,
    pub accuracy: i64,
}

/// Builds one multiple-choice question per word of the given difficulty,
/// in shuffled order, each with the correct word and three distinct wrong
/// words as options.
pub async fn build_quiz(
    db: &Database,
    difficulty: Difficulty,
) -> Result<Vec<QuizQuestion>, QuizError> {
    let pool = words::get_words_by_difficulty(db, difficulty).await?;
    if pool.len() < MIN_QUIZ_WORDS {
        return Err(QuizError::NotEnoughWords(pool.len()));
    }

    let mut rng = rand::rng();
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.shuffle(&mut rng);

    let questions = order
        .into_iter()
        .map(|idx| {
            let correct = &pool[idx];

            let mut wrong: Vec<&WordEntry> =
                pool.iter().filter(|w| w.id != correct.id).collect();
            wrong.shuffle(&mut rng);

            let mut options: Vec<String> = wrong
                .into_iter()
                .take(MIN_QUIZ_WORDS - 1)
                .map(|w| w.word.clone())
                .collect();
            options.push(correct.word.clone());
            options.shuffle(&mut rng);

            QuizQuestion {
                word: correct.clone(),
                options,
                correct_answer: correct.word.clone(),
            }
        })
        .collect();

    Ok(questions)
}

/// Past attempts for a difficulty, oldest first. A missing or corrupt
/// history reads as empty.
pub async fn history(db: &Database, difficulty: Difficulty) -> Vec<QuizAttempt> {
    let key = keys::quiz_history_key(difficulty.as_str());
    let Some(raw) = storage::get(db, &key).await else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(attempts) => attempts,
        Err(err) => {
            tracing::warn!(key, error = %err, "quiz history unreadable, starting fresh");
            Vec::new()
        }
    }
}

/// Appends a finished run to the per-difficulty history and returns the
/// stored record.
pub async fn record_attempt(
    db: &Database,
    difficulty: Difficulty,
    score: usize,
    total_questions: usize,
    points_earned: i64,
) -> QuizAttempt {
    let mut attempts = history(db, difficulty).await;

    let accuracy = if total_questions == 0 {
        0
    } else {
        (score as f64 / total_questions as f64 * 100.0).round() as i64
    };

    let attempt = QuizAttempt {
        attempt_number: attempts.len() + 1,
        date: Utc::now().to_rfc3339(),
        score,
        total_questions,
        points_earned,
        accuracy,
    };
    attempts.push(attempt.clone());

    let key = keys::quiz_history_key(difficulty.as_str());
    match serde_json::to_string(&attempts) {
        Ok(json) => storage::set(db, &key, &json).await,
        Err(err) => tracing::warn!(key, error = %err, "failed to serialize quiz history"),
    }

    attempt
}
