//! Key names for the flat store. The `@VT_` prefix and every suffix are a
//! compatibility contract with existing installs; changing one orphans the
//! data it points at.

use crate::services::progress::WordAction;

pub const POINTS: &str = "@VT_POINTS";
pub const STREAKS: &str = "@VT_STREAKS";
pub const LAST_STREAK_DATE: &str = "@VT_LAST_STREAK_DATE";
pub const LAST_DAILY_DATE: &str = "@VT_LAST_DAILY_DATE";
pub const LAST_DAILY_WORD: &str = "@VT_LAST_DAILY_WORD";
pub const LAST_ACTIVITY: &str = "@VT_LAST_ACTIVITY";
pub const LAST_REVIEWED_WORD_ID: &str = "@VT_LAST_REVIEWED_WORD_ID";
pub const MUSHROOM_NAME: &str = "@VT_MUSHROOM_NAME";
pub const ONBOARDING_COMPLETE: &str = "@VT_ONBOARDING_COMPLETE";

/// `"true"` sentinel under this key means points were already credited for
/// the (word, action) pair.
pub fn points_awarded_key(word_id: i64, action: WordAction) -> String {
    format!("@VT_POINTS_AWARDED_{}_{}", word_id, action.as_str())
}

pub fn quiz_history_key(difficulty: &str) -> String {
    format!("@VT_QUIZ_HISTORY_{}", difficulty)
}
