//! The learning flows shared by the home, flashcard and word-details
//! screens: review-list membership and learned status, with their point
//! awards and activity markers. Historically each screen carried its own
//! copy of this logic; this module is the single canonical version.

use chrono::NaiveDate;

use crate::db::operations::words::{self, ReviewState, WordEntry};
use crate::db::{Database, WordStoreError};
use crate::services::progress::{today, AwardOnceOutcome, ProgressEngine, WordAction};

/// What a flow did, for the UI to report.
#[derive(Debug, Clone)]
pub struct FlowOutcome {
    pub word: WordEntry,
    pub new_state: ReviewState,
    pub award: AwardOnceOutcome,
}

pub async fn add_to_review(
    db: &Database,
    progress: &ProgressEngine,
    word_id: i64,
) -> Result<FlowOutcome, WordStoreError> {
    add_to_review_on(db, progress, word_id, today()).await
}

pub async fn add_to_review_on(
    db: &Database,
    progress: &ProgressEngine,
    word_id: i64,
    today: NaiveDate,
) -> Result<FlowOutcome, WordStoreError> {
    let word = words::get_word_by_id(db, word_id).await?;
    words::set_review_state(db, word_id, ReviewState::InReview).await?;

    let award = progress
        .award_once_on(word_id, WordAction::Review, WordAction::Review.points(), today)
        .await;

    progress
        .set_last_activity(&format!("Added to Review: {}", word.word))
        .await;
    progress.set_last_reviewed_word_id(word_id).await;

    Ok(FlowOutcome {
        word,
        new_state: ReviewState::InReview,
        award,
    })
}

/// Takes a word off the review list. Never touches points; the award flag
/// stays set so re-adding cannot double-credit.
pub async fn remove_from_review(
    db: &Database,
    word_id: i64,
) -> Result<(), WordStoreError> {
    words::set_review_state(db, word_id, ReviewState::NotStarted).await
}

pub async fn mark_learned(
    db: &Database,
    progress: &ProgressEngine,
    word_id: i64,
) -> Result<FlowOutcome, WordStoreError> {
    mark_learned_on(db, progress, word_id, today()).await
}

pub async fn mark_learned_on(
    db: &Database,
    progress: &ProgressEngine,
    word_id: i64,
    today: NaiveDate,
) -> Result<FlowOutcome, WordStoreError> {
    let word = words::get_word_by_id(db, word_id).await?;
    words::set_review_state(db, word_id, ReviewState::Learned).await?;

    let award = progress
        .award_once_on(word_id, WordAction::Learned, WordAction::Learned.points(), today)
        .await;

    progress
        .set_last_activity(&format!("Learned: {}", word.word))
        .await;

    Ok(FlowOutcome {
        word,
        new_state: ReviewState::Learned,
        award,
    })
}

/// Moves a learned word back to the review list. No points either way.
pub async fn unmark_learned(db: &Database, word_id: i64) -> Result<(), WordStoreError> {
    words::set_review_state(db, word_id, ReviewState::InReview).await
}
