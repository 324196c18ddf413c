use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::storage::{self, keys};

pub const REVIEW_POINTS: i64 = 5;
pub const LEARNED_POINTS: i64 = 10;
pub const POINTS_PER_LEVEL: i64 = 100;
pub const STREAK_MILESTONES: &[i64] = &[5, 10, 15, 20, 30, 50, 100];

const AWARDED_SENTINEL: &str = "true";

/// Point-earning actions a word can be credited for, at most once each per
/// word for the lifetime of the install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordAction {
    Review,
    Learned,
}

impl WordAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordAction::Review => "review",
            WordAction::Learned => "learned",
        }
    }

    pub fn points(&self) -> i64 {
        match self {
            WordAction::Review => REVIEW_POINTS,
            WordAction::Learned => LEARNED_POINTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUp {
    pub level: i64,
    pub total_points: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakMilestone {
    pub streak: i64,
}

/// What a single point award did, for the UI to celebrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardOutcome {
    pub points_added: i64,
    pub new_total: i64,
    pub level_up: Option<LevelUp>,
    pub milestone: Option<StreakMilestone>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardOnceOutcome {
    Credited(AwardOutcome),
    AlreadyAwarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_points: i64,
    pub level: i64,
    pub level_progress: i64,
    pub current_streak: i64,
}

pub fn level_for_points(total_points: i64) -> i64 {
    total_points / POINTS_PER_LEVEL + 1
}

pub fn level_progress_for_points(total_points: i64) -> i64 {
    total_points % POINTS_PER_LEVEL
}

/// Points, level and streak bookkeeping over the key/value store. All
/// derived values are recomputed from the stored points on every call;
/// nothing cached here survives across calls.
#[derive(Clone)]
pub struct ProgressEngine {
    db: Database,
}

impl ProgressEngine {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub async fn stats(&self) -> ProgressStats {
        let total_points = storage::get_i64(&self.db, keys::POINTS).await.unwrap_or(0);
        let current_streak = storage::get_i64(&self.db, keys::STREAKS).await.unwrap_or(0);
        ProgressStats {
            total_points,
            level: level_for_points(total_points),
            level_progress: level_progress_for_points(total_points),
            current_streak,
        }
    }

    pub async fn award_points(&self, amount: i64) -> AwardOutcome {
        self.award_points_on(amount, today()).await
    }

    /// Adds points, signals a level-up when the 100-point boundary is
    /// crossed, and treats the award as today's streak-triggering action.
    pub async fn award_points_on(&self, amount: i64, today: NaiveDate) -> AwardOutcome {
        let current = storage::get_i64(&self.db, keys::POINTS).await.unwrap_or(0);
        let new_total = current + amount;
        let old_level = level_for_points(current);
        let new_level = level_for_points(new_total);

        storage::set_i64(&self.db, keys::POINTS, new_total).await;
        tracing::debug!(amount, new_total, "points awarded");

        let level_up = (new_level > old_level).then_some(LevelUp {
            level: new_level,
            total_points: new_total,
        });
        if let Some(up) = level_up {
            tracing::info!(level = up.level, total = up.total_points, "level up");
        }

        let milestone = self.bump_streak_on(today).await;

        AwardOutcome {
            points_added: amount,
            new_total,
            level_up,
            milestone,
        }
    }

    pub async fn award_once(&self, word_id: i64, action: WordAction, amount: i64) -> AwardOnceOutcome {
        self.award_once_on(word_id, action, amount, today()).await
    }

    /// At-most-once credit for a (word, action) pair. A set flag means no
    /// store mutation and no streak evaluation.
    pub async fn award_once_on(
        &self,
        word_id: i64,
        action: WordAction,
        amount: i64,
        today: NaiveDate,
    ) -> AwardOnceOutcome {
        let key = keys::points_awarded_key(word_id, action);
        if storage::get(&self.db, &key).await.as_deref() == Some(AWARDED_SENTINEL) {
            return AwardOnceOutcome::AlreadyAwarded;
        }

        let outcome = self.award_points_on(amount, today).await;
        storage::set(&self.db, &key, AWARDED_SENTINEL).await;
        AwardOnceOutcome::Credited(outcome)
    }

    pub async fn points_awarded(&self, word_id: i64, action: WordAction) -> bool {
        let key = keys::points_awarded_key(word_id, action);
        storage::get(&self.db, &key).await.as_deref() == Some(AWARDED_SENTINEL)
    }

    /// Lazy streak reset, run on every app open. A gap of more than one
    /// day with no new action zeroes the count but leaves the last streak
    /// date alone, so a later action still restarts at 1.
    pub async fn check_streak_on_open(&self) {
        self.check_streak_on_open_on(today()).await;
    }

    pub async fn check_streak_on_open_on(&self, today: NaiveDate) {
        let Some(last) = self.last_streak_date().await else {
            // First-ever open; a streak starts only through an action.
            return;
        };

        let gap = (today - last).num_days();
        if gap > 1 {
            storage::set_i64(&self.db, keys::STREAKS, 0).await;
            tracing::debug!(gap, "streak reset after missed days");
        }
    }

    /// Streak advance in response to a genuine action. Returns a milestone
    /// signal when the new length lands on one exactly.
    async fn bump_streak_on(&self, today: NaiveDate) -> Option<StreakMilestone> {
        let new_streak = match self.last_streak_date().await {
            None => 1,
            Some(last) => {
                let gap = (today - last).num_days();
                if gap == 0 {
                    return None;
                } else if gap == 1 {
                    storage::get_i64(&self.db, keys::STREAKS).await.unwrap_or(0) + 1
                } else {
                    1
                }
            }
        };

        storage::set_i64(&self.db, keys::STREAKS, new_streak).await;
        storage::set(&self.db, keys::LAST_STREAK_DATE, &today.to_string()).await;

        if STREAK_MILESTONES.contains(&new_streak) {
            tracing::info!(streak = new_streak, "streak milestone reached");
            Some(StreakMilestone { streak: new_streak })
        } else {
            None
        }
    }

    async fn last_streak_date(&self) -> Option<NaiveDate> {
        let raw = storage::get(&self.db, keys::LAST_STREAK_DATE).await?;
        raw.parse().ok()
    }

    pub async fn last_activity(&self) -> Option<String> {
        storage::get(&self.db, keys::LAST_ACTIVITY).await
    }

    pub async fn set_last_activity(&self, description: &str) {
        storage::set(&self.db, keys::LAST_ACTIVITY, description).await;
    }

    pub async fn last_reviewed_word_id(&self) -> Option<i64> {
        storage::get_i64(&self.db, keys::LAST_REVIEWED_WORD_ID).await
    }

    pub async fn set_last_reviewed_word_id(&self, word_id: i64) {
        storage::set_i64(&self.db, keys::LAST_REVIEWED_WORD_ID, word_id).await;
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
