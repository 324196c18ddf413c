mod common;

use chrono::NaiveDate;
use proptest::prelude::*;
use vocabutech_core::services::progress::{
    level_for_points, level_progress_for_points, AwardOnceOutcome, ProgressEngine, WordAction,
};
use vocabutech_core::storage::{self, keys};

fn day(s: &str) -> NaiveDate {
    s.parse().expect("bad test date")
}

#[tokio::test]
async fn stats_default_to_zero() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    let stats = engine.stats().await;
    assert_eq!(stats.total_points, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.level_progress, 0);
    assert_eq!(stats.current_streak, 0);
}

#[tokio::test]
async fn level_crossing_signals_level_up() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());
    let d = day("2026-08-26");

    let outcome = engine.award_points_on(95, d).await;
    assert_eq!(outcome.new_total, 95);
    assert!(outcome.level_up.is_none());

    // 95 + 10 crosses the 100 boundary.
    let outcome = engine.award_points_on(10, d).await;
    assert_eq!(outcome.new_total, 105);
    let up = outcome.level_up.expect("expected a level up");
    assert_eq!(up.level, 2);
    assert_eq!(up.total_points, 105);

    let stats = engine.stats().await;
    assert_eq!(stats.total_points, 105);
    assert_eq!(stats.level, 2);
    assert_eq!(stats.level_progress, 5);
}

#[tokio::test]
async fn award_once_credits_exactly_once() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());
    let d = day("2026-08-26");

    let first = engine.award_once_on(1, WordAction::Learned, 10, d).await;
    assert!(matches!(first, AwardOnceOutcome::Credited(o) if o.new_total == 10));
    assert!(engine.points_awarded(1, WordAction::Learned).await);

    let second = engine.award_once_on(1, WordAction::Learned, 10, d).await;
    assert!(matches!(second, AwardOnceOutcome::AlreadyAwarded));
    assert_eq!(engine.stats().await.total_points, 10);

    // Other (word, action) pairs are independent.
    let review = engine.award_once_on(1, WordAction::Review, 5, d).await;
    assert!(matches!(review, AwardOnceOutcome::Credited(_)));
    let other_word = engine.award_once_on(2, WordAction::Learned, 10, d).await;
    assert!(matches!(other_word, AwardOnceOutcome::Credited(_)));
    assert_eq!(engine.stats().await.total_points, 25);
}

#[tokio::test]
async fn award_flags_survive_restart() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());
    engine
        .award_once_on(3, WordAction::Learned, 10, day("2026-08-26"))
        .await;

    let reopened = store.reopen().await;
    let engine = ProgressEngine::new(reopened);
    assert!(engine.points_awarded(3, WordAction::Learned).await);
    assert!(matches!(
        engine
            .award_once_on(3, WordAction::Learned, 10, day("2026-08-27"))
            .await,
        AwardOnceOutcome::AlreadyAwarded
    ));
}

#[tokio::test]
async fn first_action_starts_streak_at_one() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    engine.award_points_on(5, day("2026-08-26")).await;
    let stats = engine.stats().await;
    assert_eq!(stats.current_streak, 1);
    assert_eq!(
        storage::get(&store.db, keys::LAST_STREAK_DATE).await.as_deref(),
        Some("2026-08-26")
    );
}

#[tokio::test]
async fn consecutive_day_increments_streak() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    engine.award_points_on(5, day("2026-08-25")).await;
    engine.award_points_on(5, day("2026-08-26")).await;

    let stats = engine.stats().await;
    assert_eq!(stats.current_streak, 2);
    assert_eq!(
        storage::get(&store.db, keys::LAST_STREAK_DATE).await.as_deref(),
        Some("2026-08-26")
    );
}

#[tokio::test]
async fn same_day_actions_credit_streak_once() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());
    let d = day("2026-08-26");

    engine.award_points_on(5, d).await;
    engine.award_points_on(10, d).await;
    engine.award_points_on(10, d).await;

    assert_eq!(engine.stats().await.current_streak, 1);
}

#[tokio::test]
async fn open_after_gap_resets_count_but_keeps_date() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    engine.award_points_on(5, day("2026-08-20")).await;
    engine.award_points_on(5, day("2026-08-21")).await;
    assert_eq!(engine.stats().await.current_streak, 2);

    // App opened three days later, no new action.
    engine.check_streak_on_open_on(day("2026-08-24")).await;
    assert_eq!(engine.stats().await.current_streak, 0);
    assert_eq!(
        storage::get(&store.db, keys::LAST_STREAK_DATE).await.as_deref(),
        Some("2026-08-21")
    );
}

#[tokio::test]
async fn action_after_gap_restarts_streak_at_one() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    engine.award_points_on(5, day("2026-08-20")).await;
    engine.award_points_on(5, day("2026-08-21")).await;

    engine.award_points_on(5, day("2026-08-24")).await;
    let stats = engine.stats().await;
    assert_eq!(stats.current_streak, 1);
    assert_eq!(
        storage::get(&store.db, keys::LAST_STREAK_DATE).await.as_deref(),
        Some("2026-08-24")
    );
}

#[tokio::test]
async fn open_with_no_history_does_not_start_a_streak() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    engine.check_streak_on_open_on(day("2026-08-26")).await;
    assert_eq!(engine.stats().await.current_streak, 0);
    assert!(storage::get(&store.db, keys::LAST_STREAK_DATE).await.is_none());
}

#[tokio::test]
async fn same_day_open_does_not_reset() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    engine.award_points_on(5, day("2026-08-25")).await;
    engine.award_points_on(5, day("2026-08-26")).await;
    engine.check_streak_on_open_on(day("2026-08-26")).await;
    engine.check_streak_on_open_on(day("2026-08-27")).await;

    assert_eq!(engine.stats().await.current_streak, 2);
}

#[tokio::test]
async fn milestone_fires_exactly_on_the_set() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    // Days 1-4: no milestone.
    for d in 22..=25 {
        let outcome = engine
            .award_points_on(5, day(&format!("2026-08-{d}")))
            .await;
        assert!(outcome.milestone.is_none(), "unexpected milestone on day {d}");
    }

    // Day 5 lands on the first milestone.
    let outcome = engine.award_points_on(5, day("2026-08-26")).await;
    let milestone = outcome.milestone.expect("expected 5-day milestone");
    assert_eq!(milestone.streak, 5);

    // Day 6 does not.
    let outcome = engine.award_points_on(5, day("2026-08-27")).await;
    assert!(outcome.milestone.is_none());
}

#[tokio::test]
async fn stats_are_recomputed_from_the_store() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());
    engine.award_points_on(250, day("2026-08-26")).await;

    // A second engine over a reopened handle sees the same numbers.
    let other = ProgressEngine::new(store.reopen().await);
    let stats = other.stats().await;
    assert_eq!(stats.total_points, 250);
    assert_eq!(stats.level, 3);
    assert_eq!(stats.level_progress, 50);
    assert_eq!(stats.current_streak, 1);
}

#[tokio::test]
async fn last_activity_is_overwritten() {
    let store = common::empty_store().await;
    let engine = ProgressEngine::new(store.db.clone());

    assert!(engine.last_activity().await.is_none());
    engine.set_last_activity("Added to Review: abate").await;
    engine.set_last_activity("Learned: abate").await;
    assert_eq!(engine.last_activity().await.as_deref(), Some("Learned: abate"));

    engine.set_last_reviewed_word_id(12).await;
    assert_eq!(engine.last_reviewed_word_id().await, Some(12));
}

proptest! {
    #[test]
    fn level_derivation_is_consistent(points in 0i64..=100_000) {
        let level = level_for_points(points);
        let progress = level_progress_for_points(points);
        prop_assert_eq!(level, points / 100 + 1);
        prop_assert_eq!(progress, points % 100);
        // The two derived values always recombine to the stored total.
        prop_assert_eq!((level - 1) * 100 + progress, points);
        prop_assert!((0..100).contains(&progress));
    }

    #[test]
    fn awarding_never_lowers_the_level(before in 0i64..=100_000, amount in 0i64..=1_000) {
        prop_assert!(level_for_points(before + amount) >= level_for_points(before));
    }
}
