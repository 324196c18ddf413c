mod common;

use chrono::NaiveDate;
use vocabutech_core::db::operations::words;
use vocabutech_core::db::WordStoreError;
use vocabutech_core::services::daily;
use vocabutech_core::storage::{self, keys};

fn day(s: &str) -> NaiveDate {
    s.parse().expect("bad test date")
}

#[tokio::test]
async fn same_day_calls_return_the_same_word() {
    let store = common::seeded_store().await;
    let d = day("2026-08-26");

    let first = daily::daily_word_on(&store.db, d).await.unwrap();
    let second = daily::daily_word_on(&store.db, d).await.unwrap();
    assert_eq!(first.id, second.id);

    assert_eq!(
        storage::get(&store.db, keys::LAST_DAILY_DATE).await.as_deref(),
        Some("2026-08-26")
    );
    assert_eq!(
        storage::get_i64(&store.db, keys::LAST_DAILY_WORD).await,
        Some(first.id)
    );
}

#[tokio::test]
async fn selection_is_stable_across_restart() {
    let store = common::seeded_store().await;
    let d = day("2026-08-26");

    let before = daily::daily_word_on(&store.db, d).await.unwrap();
    let reopened = store.reopen().await;
    let after = daily::daily_word_on(&reopened, d).await.unwrap();
    assert_eq!(before.id, after.id);
}

#[tokio::test]
async fn next_day_picks_fresh_and_updates_the_date() {
    let store = common::seeded_store().await;

    let first = daily::daily_word_on(&store.db, day("2026-08-26")).await.unwrap();
    let next = daily::daily_word_on(&store.db, day("2026-08-27")).await.unwrap();

    // The previous selection is still a valid row; only the stored date
    // decides staleness.
    assert!(words::get_word_by_id(&store.db, first.id).await.is_ok());
    assert_eq!(
        storage::get(&store.db, keys::LAST_DAILY_DATE).await.as_deref(),
        Some("2026-08-27")
    );
    assert_eq!(
        storage::get_i64(&store.db, keys::LAST_DAILY_WORD).await,
        Some(next.id)
    );
}

#[tokio::test]
async fn deleted_selection_falls_back_to_a_fresh_pick() {
    let store = common::seeded_store().await;
    let d = day("2026-08-26");

    let first = daily::daily_word_on(&store.db, d).await.unwrap();
    words::delete_word(&store.db, first.id).await.unwrap();

    let replacement = daily::daily_word_on(&store.db, d).await.unwrap();
    assert_ne!(replacement.id, first.id);

    // The date stays; only the word id was re-persisted.
    assert_eq!(
        storage::get(&store.db, keys::LAST_DAILY_DATE).await.as_deref(),
        Some("2026-08-26")
    );
    assert_eq!(
        storage::get_i64(&store.db, keys::LAST_DAILY_WORD).await,
        Some(replacement.id)
    );

    // And the replacement is now stable for the rest of the day.
    let again = daily::daily_word_on(&store.db, d).await.unwrap();
    assert_eq!(again.id, replacement.id);
}

#[tokio::test]
async fn empty_store_surfaces_the_error() {
    let store = common::empty_store().await;
    assert!(matches!(
        daily::daily_word_on(&store.db, day("2026-08-26")).await,
        Err(WordStoreError::EmptyStore)
    ));
}
