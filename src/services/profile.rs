//! Onboarding and display-name flags. Not part of the progress core, but
//! they live in the same key/value store as everything else.

use crate::db::Database;
use crate::storage::{self, keys};

pub async fn mushroom_name(db: &Database) -> Option<String> {
    storage::get(db, keys::MUSHROOM_NAME).await
}

pub async fn set_mushroom_name(db: &Database, name: &str) {
    storage::set(db, keys::MUSHROOM_NAME, name.trim()).await;
}

pub async fn is_onboarding_complete(db: &Database) -> bool {
    storage::get(db, keys::ONBOARDING_COMPLETE).await.as_deref() == Some("true")
}

pub async fn complete_onboarding(db: &Database, name: &str) {
    set_mushroom_name(db, name).await;
    storage::set(db, keys::ONBOARDING_COMPLETE, "true").await;
}
