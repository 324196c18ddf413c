use vocabutech_core::config::StorageConfig;
use vocabutech_core::db::operations::words;
use vocabutech_core::logging;
use vocabutech_core::services::{daily, progress::ProgressEngine};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = StorageConfig::from_env();
    let _log_guard = logging::init_tracing(&config.log_level);

    let db = match vocabutech_core::open_store(&config).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "failed to open word store");
            std::process::exit(1);
        }
    };

    let progress = ProgressEngine::new(db.clone());
    progress.check_streak_on_open().await;

    let count = words::count_words(&db).await.unwrap_or(0);
    tracing::info!(path = %config.db_path().display(), words = count, "store ready");

    match daily::daily_word(&db).await {
        Ok(word) => {
            println!("Word of the day: {}: {}", word.word, word.meaning);
            if let Some(example) = &word.example {
                println!("  e.g. {example}");
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "no daily word available");
            println!("No word available today.");
        }
    }

    let stats = progress.stats().await;
    println!(
        "Level {}, {} points ({}/100), streak {} day(s)",
        stats.level, stats.total_points, stats.level_progress, stats.current_streak
    );

    if let Some(activity) = progress.last_activity().await {
        println!("Last activity: {activity}");
    }
}
